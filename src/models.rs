//! Wire types shared with the sleep-tracker backend.
//!
//! The shell treats records and sources as opaque payloads: they are rendered
//! as-is, never recomputed locally.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One simulated night of sleep, produced entirely by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub start_time: String,
    pub wake_time: String,
    pub duration_hours: f64,
    /// Self-reported mood, 1-5.
    pub mood: u8,
}

/// Summary statistics computed by the backend over the current batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub total_hours: f64,
    pub average_duration: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    /// Correlation coefficient in [-1, 1].
    pub duration_mood_correlation: f64,
    pub duration_trend: String,
}

impl SleepSummary {
    /// Correlation formatted for display (two decimal places).
    pub fn correlation_display(&self) -> String {
        format!("{:.2}", self.duration_mood_correlation)
    }
}

/// Answer plus raw source descriptors from the RAG endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub answer: String,
    /// Opaque source descriptors, rendered as structured data.
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,
}

/// Envelope for `POST /generate-sleep-data` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub sleep_data: Vec<SleepRecord>,
}

/// Envelope for `GET /get-sleep-summary` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: SleepSummary,
}

/// Bedtime window sent as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn from_times(earliest: NaiveTime, latest: NaiveTime) -> Self {
        Self {
            start: earliest.format("%H:%M").to_string(),
            end: latest.format("%H:%M").to_string(),
        }
    }
}

/// How bedtimes are generated by the backend.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum BedtimeMode {
    #[default]
    Random,
    #[strum(serialize = "Time Range")]
    TimeRange,
}

impl BedtimeMode {
    pub fn toggled(self) -> Self {
        match self {
            BedtimeMode::Random => BedtimeMode::TimeRange,
            BedtimeMode::TimeRange => BedtimeMode::Random,
        }
    }
}

/// Body for `POST /generate-sleep-data`.
///
/// `seed` follows the backend's "0 means unset" convention and is omitted
/// from the body entirely when unset. `start_time_range` is present only in
/// time-range mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_range: Option<TimeRange>,
}

impl GenerateRequest {
    /// Builds the request body from raw form inputs.
    pub fn new(days: u32, seed: u64, mode: BedtimeMode, earliest: NaiveTime, latest: NaiveTime) -> Self {
        Self {
            days,
            seed: if seed == 0 { None } else { Some(seed) },
            start_time_range: match mode {
                BedtimeMode::Random => None,
                BedtimeMode::TimeRange => Some(TimeRange::from_times(earliest, latest)),
            },
        }
    }
}

/// Body for `POST /query-advice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceRequest {
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    /// A zero seed must be omitted from the request body entirely.
    fn zero_seed_is_omitted() {
        let req = GenerateRequest::new(7, 0, BedtimeMode::Random, time(22, 0), time(0, 30));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["days"], 7);
        assert!(json.get("seed").is_none());
        assert!(json.get("start_time_range").is_none());
    }

    #[test]
    /// Any non-zero seed is carried through as-is.
    fn nonzero_seed_is_sent() {
        for seed in [1u64, 42, 9999] {
            let req = GenerateRequest::new(30, seed, BedtimeMode::Random, time(22, 0), time(0, 30));
            let json = serde_json::to_value(&req).unwrap();
            assert_eq!(json["seed"], seed);
        }
    }

    #[test]
    /// The range is attached iff time-range mode is selected.
    fn range_follows_mode() {
        let with = GenerateRequest::new(7, 0, BedtimeMode::TimeRange, time(22, 0), time(0, 30));
        assert!(with.start_time_range.is_some());
        let without = GenerateRequest::new(7, 0, BedtimeMode::Random, time(22, 0), time(0, 30));
        assert!(without.start_time_range.is_none());
    }

    #[test]
    /// 22:00 / 00:30 must serialize exactly as the backend expects.
    fn range_formats_as_hh_mm() {
        let req = GenerateRequest::new(7, 0, BedtimeMode::TimeRange, time(22, 0), time(0, 30));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""start_time_range":{"start":"22:00","end":"00:30"}"#));
    }

    #[test]
    fn correlation_renders_two_decimals() {
        let summary = SleepSummary {
            total_hours: 56.0,
            average_duration: 8.0,
            min_duration: 6.5,
            max_duration: 9.0,
            duration_mood_correlation: 0.42,
            duration_trend: "improving".to_string(),
        };
        assert_eq!(summary.correlation_display(), "0.42");
    }

    #[test]
    fn sleep_record_parses_backend_payload() {
        let raw = r#"{
            "date": "2025-01-03",
            "start_time": "23:15",
            "wake_time": "07:05",
            "duration_hours": 7.83,
            "mood": 4
        }"#;
        let record: SleepRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(record.mood, 4);
    }

    #[test]
    /// Advice payloads may omit fields; both default to empty.
    fn advice_response_defaults() {
        let advice: AdviceResponse = serde_json::from_str("{}").unwrap();
        assert!(advice.answer.is_empty());
        assert!(advice.sources.is_empty());
    }
}
