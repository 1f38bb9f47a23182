//! Activity log: the app-wide notification sink.
//!
//! [`ActivityNotifier`] plugs the log into [`api::NotesClient`] so every
//! success or failure of a notes request shows up as an entry.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// [`api::Notifier`] that writes into the activity log.
#[derive(Clone, Copy)]
pub struct ActivityNotifier {
    log: Signal<ActivityLog>,
}

impl ActivityNotifier {
    pub fn new(log: Signal<ActivityLog>) -> Self {
        Self { log }
    }
}

impl api::Notifier for ActivityNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
        let mut log = self.log;
        log_activity(&mut log, LogLevel::Success, message);
    }

    fn error(&self, message: &str) {
        tracing::warn!("{}", message);
        let mut log = self.log;
        log_activity(&mut log, LogLevel::Error, message);
        // Open the panel on errors.
        log.write().visible = true;
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
