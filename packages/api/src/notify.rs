//! User-facing notifications emitted by [`NotesClient`](crate::NotesClient).

use std::sync::{Arc, Mutex, MutexGuard};

/// Fire-and-forget sink for success and error messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Keeps every notification in memory. Clones share the same history.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    history: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn history(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, level: NotificationLevel, message: &str) {
        self.history().push(Notification {
            level,
            message: message.to_string(),
        });
    }

    pub fn all(&self) -> Vec<Notification> {
        self.history().clone()
    }

    fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.history()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationLevel::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationLevel::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationLevel::Error, message);
    }
}
