use crate::catalog::Catalog;
use crate::types::quiz::Question;
use crate::types::tier::PressureTier;
use serde::Serialize;

#[derive(Serialize)]
struct QuestionList<'a> {
    questions: &'a [Question],
}

#[derive(Serialize)]
struct TierList<'a> {
    tiers: &'a [PressureTier],
}

pub fn questions_to_markdown(catalog: &Catalog) -> String {
    let mut output = String::from("# Questions\n\n");
    for question in catalog.questions {
        output.push_str(&format!(
            "{}. [{}] {}\n",
            question.id, question.dimension, question.text
        ));
        for option in question.options {
            output.push_str(&format!(
                "   {}. {} ({:.1})\n",
                option.label, option.text, option.weight
            ));
        }
    }
    output
}

pub fn tiers_to_markdown(catalog: &Catalog) -> String {
    let mut output = String::from("# Pressure Tiers\n\n");
    for tier in catalog.tiers {
        output.push_str(&format!(
            "- LV.{} {} ({}-{}): {}\n  {}\n",
            tier.level,
            tier.tag,
            tier.range.0,
            tier.range.1,
            tier.keywords.join(" / "),
            tier.description
        ));
    }
    output
}

pub fn questions_to_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&QuestionList {
        questions: catalog.questions,
    })
}

pub fn tiers_to_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TierList {
        tiers: catalog.tiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_listing_shows_dimension_and_weights() {
        let rendered = questions_to_markdown(&Catalog::builtin());
        assert!(rendered.contains("1. [EXTERNAL] 你的婚姻 / 恋爱状况是？"));
        assert!(rendered.contains("25. [DEFENSE]"));
        assert!(rendered.contains("   B. 转移话题，问对方问题（反客为主） (0.3)"));
    }

    #[test]
    fn tier_json_lists_all_levels() {
        let rendered = tiers_to_json(&Catalog::builtin()).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let tiers = value["tiers"].as_array().expect("tiers array");
        assert_eq!(tiers.len(), 8);
        assert_eq!(tiers[7]["range"], serde_json::json!([91, 100]));
    }
}
