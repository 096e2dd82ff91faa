//! Dashboard state management
//!
//! Holds the form inputs, the session state, and the activity log.

use crate::consts::{
    DEFAULT_DAYS, DEFAULT_EARLIEST_BEDTIME, DEFAULT_LATEST_BEDTIME, MAX_ACTIVITY_LOGS, MAX_DAYS,
    MIN_DAYS,
};
use crate::events::Event;
use crate::models::{BedtimeMode, GenerateRequest};
use crate::session::Session;

use chrono::{Duration, NaiveTime};
use std::collections::VecDeque;

/// Which form widget currently receives key input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    Days,
    Mode,
    Seed,
    Earliest,
    Latest,
    Question,
    BackendUrl,
}

impl Focus {
    /// Fields that accept free-text typing rather than action hotkeys.
    pub fn is_text(self) -> bool {
        matches!(self, Focus::Question | Focus::BackendUrl)
    }
}

/// Dashboard state: form inputs plus session data and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// Editable backend base URL.
    pub backend_url: String,
    /// Days to simulate, kept within 1-60.
    pub days: u32,
    /// Seed for the simulation; 0 means "unset" and is omitted on the wire.
    pub seed: u64,
    /// Bedtime generation mode.
    pub mode: BedtimeMode,
    /// Earliest bedtime bound for time-range mode.
    pub earliest: NaiveTime,
    /// Latest bedtime bound for time-range mode.
    pub latest: NaiveTime,
    /// Free-text advice question being typed.
    pub question: String,
    /// Whether the sources panel is expanded.
    pub sources_expanded: bool,
    /// Currently focused widget.
    pub focus: Focus,
    /// Session-scoped data (record batch, summary, advice).
    pub session: Session,
    /// Activity logs for display.
    pub activity_logs: VecDeque<Event>,
    /// Message shown while a backend call is in flight.
    pub busy: Option<String>,
}

impl DashboardState {
    pub fn new(backend_url: String) -> Self {
        let (eh, em) = DEFAULT_EARLIEST_BEDTIME;
        let (lh, lm) = DEFAULT_LATEST_BEDTIME;
        Self {
            backend_url,
            days: DEFAULT_DAYS,
            seed: 0,
            mode: BedtimeMode::default(),
            earliest: NaiveTime::from_hms_opt(eh, em, 0).unwrap_or_default(),
            latest: NaiveTime::from_hms_opt(lh, lm, 0).unwrap_or_default(),
            question: String::new(),
            sources_expanded: false,
            focus: Focus::Days,
            session: Session::new(),
            activity_logs: VecDeque::new(),
            busy: None,
        }
    }

    /// Builds the generation request body from the current form inputs.
    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest::new(self.days, self.seed, self.mode, self.earliest, self.latest)
    }

    /// Moves focus to the next widget. Time bounds are only reachable in
    /// time-range mode.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (Focus::Days, _) => Focus::Mode,
            (Focus::Mode, _) => Focus::Seed,
            (Focus::Seed, BedtimeMode::TimeRange) => Focus::Earliest,
            (Focus::Seed, BedtimeMode::Random) => Focus::Question,
            (Focus::Earliest, _) => Focus::Latest,
            (Focus::Latest, _) => Focus::Question,
            (Focus::Question, _) => Focus::BackendUrl,
            (Focus::BackendUrl, _) => Focus::Days,
        };
    }

    /// Adjusts the focused field up or down (day count, seed, time bounds,
    /// or the mode toggle).
    pub fn adjust_focused(&mut self, up: bool) {
        match self.focus {
            Focus::Days => {
                self.days = if up {
                    (self.days + 1).min(MAX_DAYS)
                } else {
                    self.days.saturating_sub(1).max(MIN_DAYS)
                };
            }
            Focus::Seed => {
                self.seed = if up {
                    self.seed.saturating_add(1)
                } else {
                    self.seed.saturating_sub(1)
                };
            }
            Focus::Mode => self.mode = self.mode.toggled(),
            Focus::Earliest => {
                let step = Duration::minutes(if up { 15 } else { -15 });
                self.earliest = self.earliest.overflowing_add_signed(step).0;
            }
            Focus::Latest => {
                let step = Duration::minutes(if up { 15 } else { -15 });
                self.latest = self.latest.overflowing_add_signed(step).0;
            }
            Focus::Question | Focus::BackendUrl => {}
        }
    }

    /// Routes a typed character to the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Question => self.question.push(c),
            Focus::BackendUrl => self.backend_url.push(c),
            Focus::Days if c.is_ascii_digit() => {
                let typed = self.days * 10 + c.to_digit(10).unwrap_or(0);
                // Restart the number when appending would overshoot the cap
                self.days = if typed > MAX_DAYS {
                    c.to_digit(10).unwrap_or(MIN_DAYS).clamp(MIN_DAYS, MAX_DAYS)
                } else {
                    typed.max(MIN_DAYS)
                };
            }
            Focus::Seed if c.is_ascii_digit() => {
                self.seed = self
                    .seed
                    .saturating_mul(10)
                    .saturating_add(u64::from(c.to_digit(10).unwrap_or(0)));
            }
            _ => {}
        }
    }

    /// Handles backspace in the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Question => {
                self.question.pop();
            }
            Focus::BackendUrl => {
                self.backend_url.pop();
            }
            Focus::Days => self.days = (self.days / 10).max(MIN_DAYS),
            Focus::Seed => self.seed /= 10,
            _ => {}
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Records an action outcome both in the status line and the log panel.
    pub fn record_event(&mut self, event: Event) {
        self.session.set_last_event(event.clone());
        self.add_to_activity_log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Action;

    fn state() -> DashboardState {
        DashboardState::new("http://127.0.0.1:8000".into())
    }

    #[test]
    fn days_stay_within_bounds() {
        let mut s = state();
        s.focus = Focus::Days;
        s.days = MAX_DAYS;
        s.adjust_focused(true);
        assert_eq!(s.days, MAX_DAYS);

        s.days = MIN_DAYS;
        s.adjust_focused(false);
        assert_eq!(s.days, MIN_DAYS);
    }

    #[test]
    fn typing_days_clamps_to_sixty() {
        let mut s = state();
        s.focus = Focus::Days;
        s.days = 0;
        s.input_char('5');
        s.input_char('9');
        assert_eq!(s.days, 59);
        // Appending another digit would exceed 60; the number restarts
        s.input_char('7');
        assert_eq!(s.days, 7);
    }

    #[test]
    fn mode_gates_time_bound_focus() {
        let mut s = state();
        s.focus = Focus::Seed;
        s.mode = BedtimeMode::Random;
        s.focus_next();
        assert_eq!(s.focus, Focus::Question);

        s.focus = Focus::Seed;
        s.mode = BedtimeMode::TimeRange;
        s.focus_next();
        assert_eq!(s.focus, Focus::Earliest);
    }

    #[test]
    fn request_reflects_form_inputs() {
        let mut s = state();
        s.days = 14;
        s.seed = 42;
        s.mode = BedtimeMode::TimeRange;
        let req = s.generate_request();
        assert_eq!(req.days, 14);
        assert_eq!(req.seed, Some(42));
        let range = req.start_time_range.unwrap();
        assert_eq!(range.start, "22:00");
        assert_eq!(range.end, "00:30");
    }

    #[test]
    fn time_bounds_wrap_past_midnight() {
        let mut s = state();
        s.focus = Focus::Latest;
        s.latest = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
        s.adjust_focused(true);
        assert_eq!(s.latest, NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut s = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            s.add_to_activity_log(Event::success(Action::Generate, format!("batch {i}")));
        }
        assert_eq!(s.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
