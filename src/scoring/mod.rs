pub mod answers;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::quiz::Dimension;
use crate::types::result::{DimensionScores, QuizResult, Score};
use crate::types::tier::PressureTier;
use answers::AnswerSheet;

/// Parses raw labels against the catalog and scores them.
pub fn score_answers<S: AsRef<str>>(catalog: &Catalog, raw: &[S]) -> Result<QuizResult> {
    let sheet = AnswerSheet::parse(catalog, raw)?;
    Ok(score(catalog, &sheet))
}

pub fn score(catalog: &Catalog, sheet: &AnswerSheet) -> QuizResult {
    let dimension_scores = dimension_scores(sheet);
    let total_score = total_score(&dimension_scores);
    let level = tier_for_score(catalog.tiers, total_score).clone();

    tracing::debug!(
        external = dimension_scores.external,
        internal = dimension_scores.internal,
        defense = dimension_scores.defense,
        total = total_score,
        level = level.level,
        "scored answer sheet"
    );

    QuizResult {
        total_score,
        level,
        dimension_scores,
        answers: sheet.labels(),
    }
}

/// Per-dimension mean weight scaled to 0..=100 and rounded. Question counts are taken
/// from the sheet, not assumed.
pub fn dimension_scores(sheet: &AnswerSheet) -> DimensionScores {
    let [external, internal, defense] = Dimension::ALL.map(|dimension| {
        let (sum, count) = sheet
            .selections()
            .iter()
            .filter(|(question, _)| question.dimension == dimension)
            .fold((0.0_f64, 0_u32), |(sum, count), (_, option)| {
                (sum + option.weight, count + 1)
            });
        if count == 0 {
            0
        } else {
            to_score((sum / f64::from(count)) * 100.0)
        }
    });

    DimensionScores {
        external,
        internal,
        defense,
    }
}

/// Weighted sum of the already-rounded dimension scores, rounded again.
pub fn total_score(scores: &DimensionScores) -> Score {
    to_score(
        f64::from(scores.external) * Dimension::External.weight()
            + f64::from(scores.internal) * Dimension::Internal.weight()
            + f64::from(scores.defense) * Dimension::Defense.weight(),
    )
}

/// Linear scan over inclusive ranges. Falls back to the first tier when nothing matches;
/// a partitioned table never reaches the fallback.
pub fn tier_for_score(tiers: &[PressureTier], score: Score) -> &PressureTier {
    match tiers.iter().find(|tier| tier.contains(score)) {
        Some(tier) => tier,
        None => {
            tracing::warn!(score, "no tier covers score; falling back to first tier");
            &tiers[0]
        }
    }
}

fn to_score(value: f64) -> Score {
    value.round().clamp(0.0, 100.0) as Score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PRESSURE_TIERS, QUESTIONS};
    use crate::error::QuizError;
    use crate::types::quiz::{Question, QuestionOption};

    fn builtin() -> Catalog {
        Catalog::builtin()
    }

    fn score_str(answers: &str) -> QuizResult {
        let raw = answers::parse_answer_list(answers);
        score_answers(&builtin(), &raw).expect("answers should score")
    }

    #[test]
    fn all_a_scores_maximum_and_top_tier() {
        let result = score_str(&"A".repeat(25));
        assert_eq!(
            result.dimension_scores,
            DimensionScores {
                external: 100,
                internal: 100,
                defense: 100
            }
        );
        assert_eq!(result.total_score, 100);
        assert_eq!(result.level.level, 8);
        assert_eq!(result.level.tag, "春节逃离计划");
    }

    #[test]
    fn all_d_scores_zero_and_first_tier() {
        let result = score_str(&"D".repeat(25));
        assert_eq!(result.dimension_scores.external, 0);
        assert_eq!(result.dimension_scores.internal, 0);
        assert_eq!(result.dimension_scores.defense, 0);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.level.level, 1);
    }

    #[test]
    fn all_b_uses_swapped_weights_on_question_18() {
        // Q18 maps B to 0.3, so DEFENSE is (0.3 + 7 * 0.6) / 8 = 56.25.
        let result = score_str(&"B".repeat(25));
        assert_eq!(result.dimension_scores.external, 60);
        assert_eq!(result.dimension_scores.internal, 60);
        assert_eq!(result.dimension_scores.defense, 56);
        assert_eq!(result.total_score, 59);
        assert_eq!(result.level.level, 5);
    }

    #[test]
    fn total_uses_rounded_dimension_scores() {
        // Unrounded dimensions would give 42 here.
        let result = score_str("ACCABBADDCBCACDBADDDCADDD");
        assert_eq!(
            result.dimension_scores,
            DimensionScores {
                external: 53,
                internal: 51,
                defense: 16
            }
        );
        assert_eq!(result.total_score, 41);
        assert_eq!(result.level.level, 4);

        let result = score_str("DBACDABBCCABBBACACACABCBD");
        assert_eq!(result.dimension_scores.external, 49);
        assert_eq!(result.dimension_scores.internal, 68);
        assert_eq!(result.dimension_scores.defense, 55);
        assert_eq!(result.total_score, 57);
    }

    #[test]
    fn dimension_rounds_half_up() {
        // Five A answers in EXTERNAL: 5 / 9 * 100 = 55.55..., rounds to 56.
        let result = score_str(&format!("AAAAA{}", "D".repeat(20)));
        assert_eq!(result.dimension_scores.external, 56);
        assert_eq!(result.total_score, 22);

        let scores = DimensionScores {
            external: 56,
            internal: 45,
            defense: 45,
        };
        // 22.4 + 13.5 + 13.5 = 49.4
        assert_eq!(total_score(&scores), 49);
    }

    #[test]
    fn scoring_is_deterministic() {
        let answers = "ABCDDCBAABCDDCBAABCDDCBAA";
        let first = score_str(answers);
        for _ in 0..10 {
            assert_eq!(score_str(answers), first);
        }
    }

    #[test]
    fn result_carries_input_answers() {
        let answers = "DCBADCBADCBADCBADCBADCBAD";
        let result = score_str(answers);
        assert_eq!(result.answers.concat(), answers);
    }

    #[test]
    fn scores_stay_in_range_for_sampled_inputs() {
        let labels = ["A", "B", "C", "D"];
        for seed in 0..400_usize {
            let raw = (0..25)
                .map(|idx| labels[(seed * 7 + idx * idx * 3 + seed / 4) % 4])
                .collect::<Vec<_>>();
            let result = score_answers(&builtin(), &raw).expect("should score");
            for dimension in Dimension::ALL {
                assert!(result.dimension_scores.get(dimension) <= 100);
            }
            assert!(result.total_score <= 100);
            assert!(result.level.contains(result.total_score));
        }
    }

    #[test]
    fn choosing_a_heavier_option_never_lowers_total() {
        let bases = ["B".repeat(25), "C".repeat(25), "ACCABBADDCBCACDBADDDCADDD".to_string()];
        for base in &bases {
            let raw = answers::parse_answer_list(base);
            let baseline = score_answers(&builtin(), &raw).expect("should score");
            for (idx, question) in QUESTIONS.iter().enumerate() {
                let current = question
                    .option(&raw[idx])
                    .expect("base label should exist")
                    .weight;
                for option in question.options.iter().filter(|o| o.weight > current) {
                    let mut changed = raw.clone();
                    changed[idx] = option.label.to_string();
                    let result = score_answers(&builtin(), &changed).expect("should score");
                    assert!(
                        result.total_score >= baseline.total_score,
                        "question {} -> {} lowered total {} -> {}",
                        question.id,
                        option.label,
                        baseline.total_score,
                        result.total_score
                    );
                }
            }
        }
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 0).level, 1);
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 12).level, 1);
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 13).level, 2);
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 90).level, 7);
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 91).level, 8);
        assert_eq!(tier_for_score(&PRESSURE_TIERS, 100).level, 8);
    }

    #[test]
    fn uncovered_score_falls_back_to_first_tier() {
        assert_eq!(tier_for_score(&PRESSURE_TIERS[1..], 5).level, 2);
    }

    #[test]
    fn wrong_length_and_unknown_labels_are_rejected() {
        let catalog = builtin();
        assert!(matches!(
            score_answers(&catalog, &vec!["A"; 24]),
            Err(QuizError::AnswerCount { actual: 24, .. })
        ));
        assert!(matches!(
            score_answers(&catalog, &vec!["A"; 26]),
            Err(QuizError::AnswerCount { actual: 26, .. })
        ));
        let mut raw = vec!["A"; 25];
        raw[24] = "X";
        assert!(matches!(
            score_answers(&catalog, &raw),
            Err(QuizError::UnknownLabel { question: 25, .. })
        ));
    }

    const fn opt(label: &'static str, weight: f64) -> QuestionOption {
        QuestionOption {
            label,
            text: "",
            weight,
        }
    }

    const FULL: &[QuestionOption] = &[opt("A", 1.0), opt("B", 0.6), opt("C", 0.3), opt("D", 0.0)];

    static SMALL: [Question; 4] = [
        Question {
            id: 1,
            text: "",
            dimension: Dimension::External,
            options: FULL,
        },
        Question {
            id: 2,
            text: "",
            dimension: Dimension::External,
            options: FULL,
        },
        Question {
            id: 3,
            text: "",
            dimension: Dimension::Internal,
            options: FULL,
        },
        Question {
            id: 4,
            text: "",
            dimension: Dimension::Defense,
            options: FULL,
        },
    ];

    #[test]
    fn dimension_counts_follow_the_catalog() {
        let catalog = Catalog::new(&SMALL, &PRESSURE_TIERS).expect("small catalog is valid");
        let result = score_answers(&catalog, &["A", "C", "B", "D"]).expect("should score");
        // (1.0 + 0.3) / 2 = 65
        assert_eq!(result.dimension_scores.external, 65);
        assert_eq!(result.dimension_scores.internal, 60);
        assert_eq!(result.dimension_scores.defense, 0);
        // 26 + 18 + 0
        assert_eq!(result.total_score, 44);
        assert!(matches!(
            score_answers(&catalog, &vec!["A"; 25]),
            Err(QuizError::AnswerCount { expected: 4, .. })
        ));
    }
}
