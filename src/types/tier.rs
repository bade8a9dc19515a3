use crate::types::result::Score;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureTier {
    pub level: u8,
    /// Inclusive on both ends.
    pub range: (Score, Score),
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

impl PressureTier {
    pub fn contains(&self, score: Score) -> bool {
        score >= self.range.0 && score <= self.range.1
    }
}
