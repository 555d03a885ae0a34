//! Validation of note input.
//!
//! Text fields are trimmed before they are checked. A field that is absent
//! or blank after trimming counts as not supplied:
//! - creation needs both `title` and `content`
//! - an update needs at least one of them

use notes_types::NoteId;

use crate::error::{StoreError, StoreResult};

/// Message for a create request missing a field.
pub const MISSING_FIELDS: &str = "Please provide both title and content";

/// Message for an update request with nothing to change.
pub const EMPTY_PATCH: &str = "Please provide title or content to update";

fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a note id from request text.
pub fn parse_id(raw: &str) -> StoreResult<NoteId> {
    Ok(raw.parse::<NoteId>()?)
}

/// Validated fields for a new note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    /// Trim and check both fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_store::NewNote;
    ///
    /// let note = NewNote::validate(Some("  Shopping "), Some("eggs")).unwrap();
    /// assert_eq!(note.title(), "Shopping");
    /// assert!(NewNote::validate(Some("title"), Some("   ")).is_err());
    /// assert!(NewNote::validate(None, Some("body")).is_err());
    /// ```
    pub fn validate(title: Option<&str>, content: Option<&str>) -> StoreResult<Self> {
        match (supplied(title), supplied(content)) {
            (Some(title), Some(content)) => Ok(Self {
                title: title.to_string(),
                content: content.to_string(),
            }),
            _ => Err(StoreError::Validation(MISSING_FIELDS.into())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

/// Partial update of a note. `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// The trimmed fields that were actually supplied.
    ///
    /// Fails if neither field carries any text.
    pub fn normalized(&self) -> StoreResult<(Option<&str>, Option<&str>)> {
        let title = supplied(self.title.as_deref());
        let content = supplied(self.content.as_deref());
        if title.is_none() && content.is_none() {
            return Err(StoreError::Validation(EMPTY_PATCH.into()));
        }
        Ok((title, content))
    }
}
