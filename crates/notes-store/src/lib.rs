//! In-memory storage for notes.
//!
//! The store owns an insertion-ordered collection of [`Note`]s and the
//! counter that hands out [`NoteId`]s. Nothing is persisted; the collection
//! lives as long as the store value does.
//!
//! # Rules
//!
//! 1. Ids come from a counter starting at 1 and are never reused, except that
//!    [`NoteStore::clear_all`] resets the counter.
//! 2. Notes keep their insertion order. Updates never reorder.
//! 3. Titles and contents are trimmed and never empty.
//! 4. Every operation completes under a single lock acquisition.
//!
//! [`Note`]: notes_types::Note
//! [`NoteId`]: notes_types::NoteId

pub mod error;
pub mod input;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use input::{parse_id, NewNote, NotePatch};
pub use memory::InMemoryNoteStore;
pub use traits::NoteStore;
