use std::sync::Mutex;

use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
    Info,
}

/// A user-facing message. How it renders is up to the [`Notifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Surfaces success, warning and error messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Success | Level::Info => info!("{}", notice.message),
            Level::Warning => warn!("{}", notice.message),
            Level::Error => error!("{}", notice.message),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Drain the recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }

    pub fn count(&self, level: Level) -> usize {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_counts_and_drains() {
        let rec = RecordingNotifier::new();
        rec.notify(Notice::new(Level::Success, "Airline created successfully"));
        rec.notify(Notice::new(Level::Error, "Error loading airlines: boom"));
        rec.notify(Notice::new(Level::Error, "Error loading airlines: again"));

        assert_eq!(rec.count(Level::Error), 2);
        assert_eq!(rec.count(Level::Warning), 0);
        assert_eq!(rec.last().unwrap().message, "Error loading airlines: again");
        assert_eq!(rec.take().len(), 3);
        assert!(rec.notices().is_empty());
    }
}
