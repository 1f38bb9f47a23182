//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_notes_client, AppNotesClient};

pub mod notes_panel;
pub use notes_panel::{
    FetchOutcome, FetchTicket, NotesPanel, NotesTab, PanelState, SaveOutcome, SaveRequest,
    ShareForm,
};

pub mod views;
pub use views::{ModalOverlay, NotesModal};

mod note_editor;
pub use note_editor::NoteEditor;

mod new_note_dialog;
pub use new_note_dialog::NewNoteDialog;

mod share_dialog;
pub use share_dialog::ShareDialog;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, ActivityNotifier, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
