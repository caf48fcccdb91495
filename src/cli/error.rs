//! CLI-level errors (wraps domain and handler errors)

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::handler::HandlerError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Handler(#[from] HandlerError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            // handlers own their exit code, pass it through unmodified
            CliError::Handler(e) => e.exit_code,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidChoice { .. } => Self::Usage(err.to_string()),
            DomainError::EmptyVocabulary(_) => Self::Config(err.to_string()),
        }
    }
}
