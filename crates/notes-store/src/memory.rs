use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use notes_types::{Note, NoteId, Timestamp};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::input::{NewNote, NotePatch};
use crate::traits::NoteStore;

#[derive(Debug)]
struct NoteTable {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl NoteTable {
    fn empty() -> Self {
        Self {
            notes: Vec::new(),
            next_id: NoteId::FIRST,
        }
    }

    fn position(&self, id: NoteId) -> StoreResult<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// In-memory, `Vec`-based note store.
///
/// Notes are kept in insertion order behind a `RwLock`; lookups are linear
/// scans. Data is lost when the store is dropped.
pub struct InMemoryNoteStore {
    table: RwLock<NoteTable>,
}

impl InMemoryNoteStore {
    /// Create a new empty store whose first note gets id 1.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(NoteTable::empty()),
        }
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> StoreResult<NoteId> {
        Ok(self.read_table()?.next_id)
    }

    fn read_table(&self) -> StoreResult<RwLockReadGuard<'_, NoteTable>> {
        self.table
            .read()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))
    }

    fn write_table(&self) -> StoreResult<RwLockWriteGuard<'_, NoteTable>> {
        self.table
            .write()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn create(&self, title: &str, content: &str) -> StoreResult<Note> {
        let (title, content) = NewNote::validate(Some(title), Some(content))?.into_parts();
        let mut table = self.write_table()?;

        let id = table.next_id;
        table.next_id = id.next();
        let note = Note::new(id, title, content, Timestamp::now());
        table.notes.push(note.clone());

        debug!(id = %id, total = table.notes.len(), "note created");
        Ok(note)
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        Ok(self.read_table()?.notes.clone())
    }

    fn get(&self, id: NoteId) -> StoreResult<Note> {
        let table = self.read_table()?;
        let index = table.position(id)?;
        Ok(table.notes[index].clone())
    }

    fn update(&self, id: NoteId, patch: &NotePatch) -> StoreResult<Note> {
        let (title, content) = patch.normalized()?;
        let mut table = self.write_table()?;
        let index = table.position(id)?;

        let note = &mut table.notes[index];
        if let Some(title) = title {
            note.title = title.to_string();
        }
        if let Some(content) = content {
            note.content = content.to_string();
        }
        note.updated_at = Timestamp::now_after(&note.updated_at);

        debug!(id = %id, "note updated");
        Ok(note.clone())
    }

    fn delete(&self, id: NoteId) -> StoreResult<Note> {
        let mut table = self.write_table()?;
        let index = table.position(id)?;
        let removed = table.notes.remove(index);

        debug!(id = %id, remaining = table.notes.len(), "note deleted");
        Ok(removed)
    }

    fn clear_all(&self) -> StoreResult<usize> {
        let mut table = self.write_table()?;
        let removed = table.notes.len();
        *table = NoteTable::empty();

        debug!(removed, "store cleared");
        Ok(removed)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read_table()?.notes.len())
    }
}

impl std::fmt::Debug for InMemoryNoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryNoteStore")
            .field("note_count", &count)
            .finish()
    }
}
