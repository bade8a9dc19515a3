use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    External,
    Internal,
    Defense,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::External, Dimension::Internal, Dimension::Defense];

    /// Contribution of this dimension to the total score.
    pub fn weight(self) -> f64 {
        match self {
            Dimension::External => 0.4,
            Dimension::Internal => 0.3,
            Dimension::Defense => 0.3,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::External => "外部环境压力",
            Dimension::Internal => "个人抗压特质",
            Dimension::Defense => "应对防御能力",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::External => "EXTERNAL",
            Dimension::Internal => "INTERNAL",
            Dimension::Defense => "DEFENSE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub text: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub dimension: Dimension,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|option| option.label == label)
    }
}
