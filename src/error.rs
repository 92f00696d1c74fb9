//! Error taxonomy for the health check engine.
//!
//! Failures are isolated at the smallest unit that makes sense: a single
//! fact or a single record. Only [`HealthCheckError::MalformedInput`] on the
//! top-level summary blob aborts a whole pass, since every downstream index
//! depends on it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthCheckError {
    /// The summary blob was empty or unusable. Fatal to the whole pass.
    #[error("summary blob is empty or not in the expected sectioned format")]
    MalformedInput,

    /// A single fact was absent or out of bounds. Recoverable; the fact is
    /// omitted or defaulted by the caller.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A size value carried an unrecognized unit token. Recoverable.
    #[error("unrecognized size unit in {0:?}")]
    UnitParseError(String),

    /// Two children with the same name were added to one report object.
    /// This is builder misuse, not a user-facing condition.
    #[error("duplicate name in report object: {0:?}")]
    DuplicateName(String),

    /// The remote console could not be fetched for one path. Recoverable;
    /// the affected object is skipped and logged.
    #[error("fetch failed for {path}: {message}")]
    RemoteFetchFailed { path: String, message: String },
}

impl HealthCheckError {
    pub fn missing(what: impl Into<String>) -> Self {
        HealthCheckError::MissingField(what.into())
    }

    pub fn fetch(path: impl Into<String>, message: impl ToString) -> Self {
        HealthCheckError::RemoteFetchFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthCheckError>;
