use serde::{Deserialize, Serialize};

use crate::id::NoteId;
use crate::temporal::Timestamp;

/// A short text note.
///
/// `id` and `created_at` never change after creation. `title` and `content`
/// are stored trimmed and are never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Note {
    /// A new note whose timestamps are both `at`.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Returns `true` if the note was never modified after creation.
    pub fn is_pristine(&self) -> bool {
        self.created_at == self.updated_at
    }
}
