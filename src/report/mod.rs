pub mod catalog;
pub mod json;
pub mod md;

use crate::error::QuizError;
use crate::types::result::QuizResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Which part of the result the reader has unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Full,
    Locked,
}

pub fn render(result: &QuizResult, view: View, format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(result, view).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result, view)),
    }
}
