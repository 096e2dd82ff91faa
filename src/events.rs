//! Activity-log events.
//!
//! Each user action records one event describing its outcome; the dashboard
//! shows the most recent ones in a log panel.

use crate::logging::{LogLevel, get_rust_log_level, should_log};
use chrono::Local;
use std::fmt::Display;

/// Which user action produced the event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Action {
    Generate,
    Summary,
    Advice,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Warning,
    /// Request-level detail, hidden unless RUST_LOG lowers the threshold.
    Debug,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub action: Action,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(action: Action, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            action,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Error, LogLevel::Error)
    }

    pub fn warning(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Warning, LogLevel::Warn)
    }

    pub fn debug(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Debug, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        // Success and info level events always show
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.action, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_action_and_message() {
        let event = Event::error(Action::Generate, "HTTP error with status 500".into());
        let text = event.to_string();
        assert!(text.contains("Generate"));
        assert!(text.contains("HTTP error with status 500"));
    }

    #[test]
    fn info_and_success_always_display() {
        assert!(Event::success(Action::Advice, "ok".into()).should_display());
        assert!(Event::warning(Action::Advice, "blank".into()).should_display());
    }

    #[test]
    fn debug_events_follow_the_log_threshold() {
        let event = Event::debug(Action::Summary, "GET /get-sleep-summary".into());
        assert!(!event.should_display_at(LogLevel::Info));
        assert!(event.should_display_at(LogLevel::Debug));
        assert!(event.should_display_at(LogLevel::Trace));
    }
}
