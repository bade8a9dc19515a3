pub mod questions;
pub mod tiers;

use crate::error::{QuizError, Result};
use crate::types::quiz::{Dimension, Question};
use crate::types::tier::PressureTier;
use serde::Serialize;

pub use questions::QUESTIONS;
pub use tiers::PRESSURE_TIERS;

/// Every question carries these weights exactly once.
pub const OPTION_WEIGHTS: [f64; 4] = [1.0, 0.6, 0.3, 0.0];
pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];
pub const SCORE_MIN: u8 = 0;
pub const SCORE_MAX: u8 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub questions: &'static [Question],
    pub tiers: &'static [PressureTier],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogIssue {
    pub id: String,
    pub message: String,
}

impl CatalogIssue {
    fn new(id: &str, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            message: message.into(),
        }
    }
}

impl Catalog {
    /// The shipped survey and tier tables.
    pub fn builtin() -> Self {
        Self {
            questions: &QUESTIONS,
            tiers: &PRESSURE_TIERS,
        }
    }

    /// Builds a catalog from custom tables, rejecting any that break a table invariant.
    #[allow(dead_code)]
    pub fn new(questions: &'static [Question], tiers: &'static [PressureTier]) -> Result<Self> {
        let catalog = Self { questions, tiers };
        let issues = catalog.validate();
        if let Some(first) = issues.first() {
            return Err(QuizError::Catalog(format!("{}: {}", first.id, first.message)));
        }
        Ok(catalog)
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = validate_questions(self.questions);
        issues.extend(validate_tiers(self.tiers));
        issues
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

pub fn validate_questions(questions: &[Question]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for (idx, question) in questions.iter().enumerate() {
        let expected_id = idx as u32 + 1;
        if question.id != expected_id {
            issues.push(CatalogIssue::new(
                "questions.order",
                format!(
                    "question at position {} has id {} (expected {})",
                    idx + 1,
                    question.id,
                    expected_id
                ),
            ));
        }

        if question.options.len() != OPTION_LABELS.len() {
            issues.push(CatalogIssue::new(
                "questions.option_count",
                format!(
                    "question {} has {} options (expected {})",
                    question.id,
                    question.options.len(),
                    OPTION_LABELS.len()
                ),
            ));
            continue;
        }

        let mut labels = question
            .options
            .iter()
            .map(|option| option.label)
            .collect::<Vec<_>>();
        labels.sort_unstable();
        if labels != OPTION_LABELS {
            issues.push(CatalogIssue::new(
                "questions.labels",
                format!(
                    "question {} labels are {} (expected A, B, C, D once each)",
                    question.id,
                    labels.join(", ")
                ),
            ));
        }

        let mut unmatched = OPTION_WEIGHTS.to_vec();
        for option in question.options {
            match unmatched
                .iter()
                .position(|weight| (weight - option.weight).abs() < f64::EPSILON)
            {
                Some(pos) => {
                    unmatched.remove(pos);
                }
                None => issues.push(CatalogIssue::new(
                    "questions.weights",
                    format!(
                        "question {} option {} has weight {} outside {{1.0, 0.6, 0.3, 0.0}} or repeats one",
                        question.id, option.label, option.weight
                    ),
                )),
            }
        }
    }

    for dimension in Dimension::ALL {
        if !questions
            .iter()
            .any(|question| question.dimension == dimension)
        {
            issues.push(CatalogIssue::new(
                "questions.dimension_empty",
                format!("dimension {dimension} has no questions"),
            ));
        }
    }

    issues
}

pub fn validate_tiers(tiers: &[PressureTier]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let (Some(first), Some(last)) = (tiers.first(), tiers.last()) else {
        issues.push(CatalogIssue::new("tiers.empty", "tier table is empty"));
        return issues;
    };
    if first.range.0 != SCORE_MIN {
        issues.push(CatalogIssue::new(
            "tiers.start",
            format!("first tier starts at {} (expected {SCORE_MIN})", first.range.0),
        ));
    }
    if last.range.1 != SCORE_MAX {
        issues.push(CatalogIssue::new(
            "tiers.end",
            format!("last tier ends at {} (expected {SCORE_MAX})", last.range.1),
        ));
    }

    for (idx, tier) in tiers.iter().enumerate() {
        if usize::from(tier.level) != idx + 1 {
            issues.push(CatalogIssue::new(
                "tiers.level",
                format!(
                    "tier at position {} has level {} (expected {})",
                    idx + 1,
                    tier.level,
                    idx + 1
                ),
            ));
        }
        if tier.range.0 > tier.range.1 {
            issues.push(CatalogIssue::new(
                "tiers.range",
                format!(
                    "tier {} range [{}, {}] is inverted",
                    tier.level, tier.range.0, tier.range.1
                ),
            ));
        }
    }

    for pair in tiers.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let expected = u16::from(prev.range.1) + 1;
        if u16::from(next.range.0) != expected {
            let kind = if u16::from(next.range.0) < expected {
                "overlaps"
            } else {
                "leaves a gap after"
            };
            issues.push(CatalogIssue::new(
                "tiers.partition",
                format!("tier {} {kind} tier {}", next.level, prev.level),
            ));
        }
    }

    issues
}
