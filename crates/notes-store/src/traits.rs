use notes_types::{Note, NoteId};

use crate::error::StoreResult;
use crate::input::NotePatch;

/// Ordered note collection with a store-assigned id counter.
///
/// All implementations must satisfy these invariants:
/// - `create` assigns the next counter value and appends to the end.
/// - `list` returns notes in insertion order.
/// - `update` changes only `title`, `content`, and `updated_at`.
/// - `delete` keeps the relative order of the remaining notes.
/// - Each call is atomic with respect to every other call.
pub trait NoteStore: Send + Sync {
    /// Create a note from untrimmed input.
    ///
    /// Both fields must be non-empty after trimming.
    fn create(&self, title: &str, content: &str) -> StoreResult<Note>;

    /// All notes, oldest first.
    fn list(&self) -> StoreResult<Vec<Note>>;

    /// Fetch a note by id.
    fn get(&self, id: NoteId) -> StoreResult<Note>;

    /// Apply a partial update and refresh `updated_at`.
    fn update(&self, id: NoteId, patch: &NotePatch) -> StoreResult<Note>;

    /// Remove a note and return it.
    fn delete(&self, id: NoteId) -> StoreResult<Note>;

    /// Remove every note and reset the id counter. Returns how many were removed.
    fn clear_all(&self) -> StoreResult<usize>;

    /// Number of notes currently stored.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
