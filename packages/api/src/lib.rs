//! # API crate: typed client for the notes backend
//!
//! Everything the UI needs to talk to the notes REST API, with no UI
//! dependency of its own.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Note`, `NoteInput`, `ShareRequest` and `Role` wire types |
//! | [`config`] | Base URL and per-operation endpoint paths, loaded from `notes.toml` / environment |
//! | [`transport`] | The [`Transport`] seam, with a reqwest implementation and an in-memory mock |
//! | [`notify`] | The [`Notifier`] seam for user-facing success/error messages |
//! | [`client`] | [`NotesClient`], one async method per backend operation |
//! | [`error`] | [`TransportError`] and [`NotesError`] |
//!
//! ## Operations
//!
//! - **Notes**: `create_note`, `my_notes`, `public_notes`, `note`, `update_note`, `delete_note`
//! - **Sharing**: `share_note`, `request_access`, `approve_access`

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod transport;

pub use client::{NotesClient, Operation};
pub use config::{ApiConfig, ClientConfig, Endpoints};
pub use error::{NotesError, TransportError};
pub use models::{
    Note, NoteId, NoteInput, OwnerRef, OwnerUser, ParseRoleError, Role, ShareRequest,
};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier};
pub use transport::{HttpTransport, Method, MockTransport, RecordedRequest, Transport};
