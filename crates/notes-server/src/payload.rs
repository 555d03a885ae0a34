//! JSON request and response bodies.
//!
//! Every response carries a `success` flag. Failures carry only `message`.

use notes_types::Note;
use serde::{Deserialize, Serialize};

/// Body of create and update requests. Both fields are optional on the wire;
/// the store decides which combinations are acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteInput {
    /// Parse a request body. An empty body is treated as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct NoteCreated {
    pub success: bool,
    pub message: String,
    pub note: Note,
}

#[derive(Clone, Debug, Serialize)]
pub struct NoteList {
    pub success: bool,
    pub count: usize,
    pub notes: Vec<Note>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NoteFound {
    pub success: bool,
    pub note: Note,
}

#[derive(Clone, Debug, Serialize)]
pub struct NoteUpdated {
    pub success: bool,
    pub message: String,
    pub note: Note,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDeleted {
    pub success: bool,
    pub message: String,
    pub deleted_note: Note,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesCleared {
    pub success: bool,
    pub message: String,
    pub deleted_count: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
