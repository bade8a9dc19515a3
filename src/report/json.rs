use crate::report::View;
use crate::types::result::QuizResult;
use serde_json::json;

pub fn to_json(result: &QuizResult, view: View) -> Result<String, serde_json::Error> {
    match view {
        View::Full => serde_json::to_string_pretty(result),
        View::Locked => serde_json::to_string_pretty(&json!({
            "locked": true,
            "totalScore": result.total_score,
            "level": {
                "level": result.level.level,
                "tag": result.level.tag,
            },
        })),
    }
}
