//! Shared notes client for all platforms.
//!
//! The app provides one [`AppNotesClient`] through context, wrapped in a
//! `Signal` so event handlers and spawned tasks can copy the handle freely.
//! Notifications go to the [`ActivityLog`](crate::ActivityLog).

use api::{ApiConfig, HttpTransport, NotesClient};
use dioxus::prelude::*;

use crate::activity_log::{ActivityLog, ActivityNotifier};

/// The client type the components talk to.
pub type AppNotesClient = NotesClient<HttpTransport, ActivityNotifier>;

/// Build a client that reports into `log`.
pub fn make_client(config: ApiConfig, log: Signal<ActivityLog>) -> AppNotesClient {
    NotesClient::new(HttpTransport::new(), ActivityNotifier::new(log), config)
}

/// Get the client provided by the app root.
pub fn use_notes_client() -> Signal<AppNotesClient> {
    use_context::<Signal<AppNotesClient>>()
}
