//! Data models for the notes API.

mod note;

pub use note::{Note, NoteId, NoteInput, OwnerRef, OwnerUser, ParseRoleError, Role, ShareRequest};
pub(crate) use note::{NoteEnvelope, NoteList};
