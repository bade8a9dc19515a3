use crate::error::QuizError;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `-q` keeps errors only and each `-v` steps up from warn.
pub fn init(verbose: u8, quiet: bool) -> Result<(), QuizError> {
    let fallback = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|err| QuizError::Telemetry(format!("invalid filter '{fallback}': {err}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| QuizError::Telemetry(err.to_string()))
}
