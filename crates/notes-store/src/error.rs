use notes_types::{NoteId, TypeError};

/// Errors from note store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// Request input was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The note id could not be parsed as an integer.
    #[error("Invalid note ID")]
    InvalidId(String),

    /// No note has the requested id.
    #[error("Note not found")]
    NotFound(NoteId),

    /// Unexpected failure inside the store, e.g. a poisoned lock.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Returns `true` for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

impl From<TypeError> for StoreError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidNoteId(raw) => Self::InvalidId(raw),
            other => Self::Validation(other.to_string()),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
