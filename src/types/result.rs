use crate::types::quiz::Dimension;
use crate::types::tier::PressureTier;
use serde::Serialize;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScores {
    #[serde(rename = "EXTERNAL")]
    pub external: Score,
    #[serde(rename = "INTERNAL")]
    pub internal: Score,
    #[serde(rename = "DEFENSE")]
    pub defense: Score,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::External => self.external,
            Dimension::Internal => self.internal,
            Dimension::Defense => self.defense,
        }
    }
}

/// Outcome of one completed quiz. Built once by the scoring engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub total_score: Score,
    pub level: PressureTier,
    pub dimension_scores: DimensionScores,
    pub answers: Vec<&'static str>,
}
