use crate::types::result::QuizResult;

pub const SYSTEM_INSTRUCTION: &str = "你是「测测春节你被围攻的压力值」专属AI深度分析引擎，服务18-35岁春节返乡年轻群体，仅输出纯文本、无格式、无符号、无互动、无海报、无语音的定制化分析报告，单份报告总字数严格控制在2900-3100字。全程采用同龄人吐槽式、接地气、梗系化、生活化语言。";

pub const REPORT_MODULES: [&str; 4] = [
    "春节压力全景总览",
    "核心压力源深度拆解",
    "高危围攻场景全景预判",
    "专属反围攻深度生存指南",
];

/// Renders the user prompt from exactly the scored fields: total, tier level and tag,
/// the three dimension scores and the raw answer labels.
pub fn build_prompt(result: &QuizResult) -> String {
    let mut prompt = String::new();
    prompt.push_str("核心输入参数：\n");
    prompt.push_str(&format!("用户总压力值：{}\n", result.total_score));
    prompt.push_str(&format!("压力等级：第 {} 级\n", result.level.level));
    prompt.push_str(&format!("等级标签：{}\n", result.level.tag));
    prompt.push_str(&format!(
        "外部环境压力维度分：{}\n",
        result.dimension_scores.external
    ));
    prompt.push_str(&format!(
        "个人抗压特质维度分：{}\n",
        result.dimension_scores.internal
    ));
    prompt.push_str(&format!(
        "应对策略防御维度分：{}\n",
        result.dimension_scores.defense
    ));
    prompt.push_str(&format!(
        "答题原始选项（前{}题字母）：{}\n\n",
        result.answers.len(),
        result.answers.join(", ")
    ));
    prompt.push_str("请根据上述参数，生成一份约3000字的深度分析报告。\n");
    prompt.push_str("注意：请在每个模块之间使用明确的 [模块标题] 并保留段落。\n\n");
    prompt.push_str("报告必须包含以下四个模块：\n");
    for (idx, module) in REPORT_MODULES.iter().enumerate() {
        prompt.push_str(&format!("{}. [{}]\n", idx + 1, module));
    }
    prompt.push_str("\n语言风格：同龄人吐槽式、接地气、梗系化。\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring::score_answers;

    #[test]
    fn prompt_carries_the_five_result_fields() {
        let raw = crate::scoring::answers::parse_answer_list("ACCABBADDCBCACDBADDDCADDD");
        let result = score_answers(&Catalog::builtin(), &raw).expect("should score");
        let prompt = build_prompt(&result);

        assert!(prompt.contains("用户总压力值：41\n"));
        assert!(prompt.contains("压力等级：第 4 级\n"));
        assert!(prompt.contains("等级标签：中场抗压玩家\n"));
        assert!(prompt.contains("外部环境压力维度分：53\n"));
        assert!(prompt.contains("个人抗压特质维度分：51\n"));
        assert!(prompt.contains("应对策略防御维度分：16\n"));
        assert!(prompt.contains("（前25题字母）：A, C, C, A, B, B, A, D, D, C"));
    }

    #[test]
    fn prompt_lists_all_report_modules_in_brackets() {
        let result = score_answers(&Catalog::builtin(), &vec!["C"; 25]).expect("should score");
        let prompt = build_prompt(&result);
        for module in REPORT_MODULES {
            assert!(prompt.contains(&format!("[{module}]")));
        }
    }
}
