use crate::report::View;
use crate::types::quiz::Dimension;
use crate::types::result::{QuizResult, Score};

const BAR_WIDTH: usize = 20;

pub fn to_markdown(result: &QuizResult, view: View) -> String {
    let mut output = String::new();
    output.push_str("# 春节压力测评报告\n\n");
    output.push_str(&format!("Pressure score: {}\n\n", result.total_score));
    output.push_str(&format!(
        "## LV.{} {} ({}-{})\n\n",
        result.level.level, result.level.tag, result.level.range.0, result.level.range.1
    ));

    if view == View::Locked {
        output.push_str("_Full report is locked._\n");
        return output;
    }

    output.push_str(&format!("Keywords: {}\n\n", result.level.keywords.join(" / ")));
    output.push_str(&format!("{}\n\n", result.level.description));

    output.push_str("## Dimensions\n\n");
    for dimension in Dimension::ALL {
        let shown = displayed_score(dimension, result.dimension_scores.get(dimension));
        output.push_str(&format!(
            "- {}: {} {}\n",
            dimension.display_name(),
            bar(shown),
            shown
        ));
    }
    output.push('\n');

    output.push_str(&format!("Answers: {}\n", result.answers.join(" ")));
    output
}

/// DEFENSE is shown inverted as coping ability.
fn displayed_score(dimension: Dimension, score: Score) -> Score {
    match dimension {
        Dimension::Defense => 100 - score,
        _ => score,
    }
}

fn bar(score: Score) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring::score_answers;

    #[test]
    fn markdown_report_contains_sections() {
        let result = score_answers(&Catalog::builtin(), &vec!["A"; 25]).expect("should score");
        let rendered = to_markdown(&result, View::Full);
        assert!(rendered.contains("Pressure score: 100"));
        assert!(rendered.contains("LV.8 春节逃离计划 (91-100)"));
        assert!(rendered.contains("## Dimensions"));
        assert!(rendered.contains("极限压力 / 全面崩盘 / 急需撤离"));
    }

    #[test]
    fn defense_bar_is_inverted() {
        let result = score_answers(&Catalog::builtin(), &vec!["A"; 25]).expect("should score");
        let rendered = to_markdown(&result, View::Full);
        assert!(rendered.contains("- 应对防御能力: [....................] 0"));
        assert!(rendered.contains("- 外部环境压力: [####################] 100"));
    }

    #[test]
    fn locked_view_stops_after_tier_heading() {
        let result = score_answers(&Catalog::builtin(), &vec!["D"; 25]).expect("should score");
        let rendered = to_markdown(&result, View::Locked);
        assert!(rendered.contains("LV.1 春节隐身王者"));
        assert!(rendered.contains("locked"));
        assert!(!rendered.contains("## Dimensions"));
    }
}
