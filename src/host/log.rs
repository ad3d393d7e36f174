//! `host/log.rs` — per-adapter log entries
//!
//! `post`/`error` calls from handlers land here and in the `log` facade.
//! The engine keeps a capped buffer per adapter for the host UI.

/// One `post` or `error` line from a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub timestamp: i64,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new("info", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }

    fn new(level: &str, message: impl Into<String>) -> Self {
        Self {
            level: level.to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
