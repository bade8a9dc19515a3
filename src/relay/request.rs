use crate::types::config::AiConfig;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::prompt::SYSTEM_INSTRUCTION;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Request body for an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub stream: bool,
}

impl CompletionRequest {
    pub fn new(settings: &AiConfig, prompt: &str) -> Self {
        Self {
            model: settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: settings.temperature,
            stream: settings.stream,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportTask {
    pub task_id: String,
    pub requested_at: String,
    pub request: CompletionRequest,
}

impl ReportTask {
    pub fn new(settings: &AiConfig, prompt: &str) -> Self {
        Self {
            task_id: task_id(prompt),
            requested_at: Utc::now().to_rfc3339(),
            request: CompletionRequest::new(settings, prompt),
        }
    }
}

/// Same prompt, same id; lets a poller dedupe repeated requests for one result.
pub fn task_id(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    let hex = digest
        .iter()
        .take(6)
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    format!("task_{hex}")
}
