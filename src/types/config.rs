use crate::error::QuizError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub unlock: UnlockConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "md".to_string()
}

/// Local payment-gate flags, one per report type.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UnlockConfig {
    #[serde(default)]
    pub basic: bool,
    #[serde(default)]
    pub ai: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_stream")]
    pub stream: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            stream: default_stream(),
        }
    }
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_stream() -> bool {
    true
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if !matches!(self.output.format.as_str(), "md" | "json") {
            return Err(QuizError::ConfigParse(format!(
                "unsupported output.format: {}",
                self.output.format
            )));
        }

        if self.ai.model.trim().is_empty() {
            return Err(QuizError::ConfigParse(
                "ai.model cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(QuizError::ConfigParse(
                "ai.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }

        Ok(())
    }
}
