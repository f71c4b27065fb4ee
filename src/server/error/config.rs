use thiserror::Error;

/// Startup configuration could not be read from the environment.
///
/// Only raised by `Config::from_env` before the server starts; `main` reports it on stderr
/// and exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` or `PROVIDER_URL` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but its value cannot be used, e.g. a zero refresh interval.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
