use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("question {question}: unknown option label {label:?}")]
    UnknownLabel { question: u32, label: String },

    #[error("catalog invariant violated: {0}")]
    Catalog(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("{0} view is locked; set unlock.{0} = true to enable it")]
    Locked(String),

    #[error("logging setup failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
