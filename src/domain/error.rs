//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invocation-level violations.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid value '{value}' for '--{flag}' (legal values: {legal})")]
    InvalidChoice {
        flag: &'static str,
        value: String,
        legal: String,
    },

    #[error("vocabulary '{0}' is empty")]
    EmptyVocabulary(&'static str),
}

pub type DomainResult<T> = Result<T, DomainError>;
