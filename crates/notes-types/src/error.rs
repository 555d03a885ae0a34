use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid note id: {0:?}")]
    InvalidNoteId(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
