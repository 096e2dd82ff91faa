//! Session-scoped dashboard state.
//!
//! One `Session` lives for one run of the dashboard and is passed explicitly
//! to the actions and the rendering routine. The record batch is either
//! empty or the result of the last successful generation call; failed calls
//! never touch it.

use crate::events::Event;
use crate::models::{AdviceResponse, SleepRecord, SleepSummary};

#[derive(Debug, Default)]
pub struct Session {
    /// Last successfully generated batch, overwritten wholesale on success.
    records: Vec<SleepRecord>,
    /// Summary for the current batch, if fetched.
    summary: Option<SleepSummary>,
    /// Last advice response, if any.
    advice: Option<AdviceResponse>,
    /// Most recent action outcome, shown in the status line.
    last_event: Option<Event>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn records(&self) -> &[SleepRecord] {
        &self.records
    }

    pub fn summary(&self) -> Option<&SleepSummary> {
        self.summary.as_ref()
    }

    pub fn advice(&self) -> Option<&AdviceResponse> {
        self.advice.as_ref()
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.last_event.as_ref()
    }

    /// Replaces the batch with a freshly generated one. The stored summary
    /// belongs to the previous batch and is dropped with it.
    pub fn replace_records(&mut self, records: Vec<SleepRecord>) {
        self.records = records;
        self.summary = None;
    }

    pub fn set_summary(&mut self, summary: SleepSummary) {
        self.summary = Some(summary);
    }

    pub fn set_advice(&mut self, advice: AdviceResponse) {
        self.advice = Some(advice);
    }

    pub fn set_last_event(&mut self, event: Event) {
        self.last_event = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32) -> SleepRecord {
        SleepRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            start_time: "23:00".into(),
            wake_time: "07:00".into(),
            duration_hours: 8.0,
            mood: 3,
        }
    }

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(!session.has_data());
        assert!(session.summary().is_none());
    }

    #[test]
    fn replacing_records_drops_stale_summary() {
        let mut session = Session::new();
        session.replace_records(vec![record(1)]);
        session.set_summary(SleepSummary {
            total_hours: 8.0,
            average_duration: 8.0,
            min_duration: 8.0,
            max_duration: 8.0,
            duration_mood_correlation: 0.0,
            duration_trend: "stable".into(),
        });

        session.replace_records(vec![record(2), record(3)]);
        assert_eq!(session.records().len(), 2);
        assert!(session.summary().is_none(), "summary must not outlive its batch");
    }
}
