//! Foundation types for the notes service.
//!
//! Every other crate in the workspace depends on `notes-types`.
//!
//! # Key Types
//!
//! - [`NoteId`] — Integer identifier assigned by the store
//! - [`Timestamp`] — Millisecond-precision UTC instant, serialized as ISO-8601
//! - [`Note`] — The note record itself

pub mod error;
pub mod id;
pub mod note;
pub mod temporal;

pub use error::TypeError;
pub use id::NoteId;
pub use note::Note;
pub use temporal::Timestamp;
