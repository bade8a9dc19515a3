use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::types::quiz::{Question, QuestionOption};

/// A complete answer set: one resolved option per question, in question order.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    selections: Vec<(&'static Question, &'static QuestionOption)>,
}

impl AnswerSheet {
    /// Length is checked before any label so a short sheet never reports a label error.
    pub fn parse<S: AsRef<str>>(catalog: &Catalog, raw: &[S]) -> Result<Self> {
        let expected = catalog.question_count();
        if raw.len() != expected {
            return Err(QuizError::AnswerCount {
                expected,
                actual: raw.len(),
            });
        }

        let selections = catalog
            .questions
            .iter()
            .zip(raw)
            .map(|(question, answer)| {
                let label = answer.as_ref().trim();
                question
                    .option(label)
                    .map(|option| (question, option))
                    .ok_or_else(|| QuizError::UnknownLabel {
                        question: question.id,
                        label: label.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { selections })
    }

    pub fn selections(&self) -> &[(&'static Question, &'static QuestionOption)] {
        &self.selections
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.selections
            .iter()
            .map(|(_, option)| option.label)
            .collect()
    }
}

/// Splits CLI input into labels: `"AABD"` is read one character per answer,
/// anything containing commas or whitespace is read as a delimited list.
pub fn parse_answer_list(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.contains(|c: char| c == ',' || c.is_whitespace()) {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        input.chars().map(String::from).collect()
    }
}
