//! The three user actions, expressed over the backend trait.
//!
//! Each action is atomic from the UI's perspective: full success with a
//! state update, or failure with no state change. Errors are turned into
//! activity-log events at the call site and never propagate further.

use crate::backend::SleepBackend;
use crate::backend::error::BackendError;
use crate::events::{Action, Event};
use crate::models::GenerateRequest;
use crate::session::Session;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Generates a fresh batch of sleep data. On success the session batch is
/// replaced wholesale; on failure the prior batch is left untouched.
pub async fn generate(
    backend: &dyn SleepBackend,
    session: &mut Session,
    request: &GenerateRequest,
) -> Result<(), ActionError> {
    match backend.generate_sleep_data(request).await {
        Ok(records) => {
            let count = records.len();
            session.replace_records(records);
            session.set_last_event(Event::success(
                Action::Generate,
                format!("Sleep data generated ({count} records)"),
            ));
            Ok(())
        }
        Err(e) => {
            session.set_last_event(Event::error(
                Action::Generate,
                format!("Failed to generate: {e}"),
            ));
            Err(e.into())
        }
    }
}

/// Fetches the summary for the current batch. Skipped entirely when the
/// session holds no data.
pub async fn fetch_summary(
    backend: &dyn SleepBackend,
    session: &mut Session,
) -> Result<(), ActionError> {
    if !session.has_data() {
        return Ok(());
    }
    match backend.get_sleep_summary().await {
        Ok(summary) => {
            session.set_summary(summary);
            session.set_last_event(Event::success(Action::Summary, "Summary fetched".into()));
            Ok(())
        }
        Err(e) => {
            session.set_last_event(Event::error(
                Action::Summary,
                format!("Failed to get summary: {e}"),
            ));
            Err(e.into())
        }
    }
}

/// Sends a question to the advice endpoint. Blank input is rejected before
/// any network call is made.
pub async fn ask_advice(
    backend: &dyn SleepBackend,
    session: &mut Session,
    question: &str,
) -> Result<(), ActionError> {
    if question.trim().is_empty() {
        let warning = "Please enter a question.".to_string();
        session.set_last_event(Event::warning(Action::Advice, warning.clone()));
        return Err(ActionError::InvalidInput(warning));
    }
    match backend.query_advice(question).await {
        Ok(advice) => {
            session.set_advice(advice);
            session.set_last_event(Event::success(Action::Advice, "Advice received".into()));
            Ok(())
        }
        Err(e) => {
            session.set_last_event(Event::error(
                Action::Advice,
                format!("Failed to get advice: {e}"),
            ));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSleepBackend;
    use crate::events::EventType;
    use crate::models::{AdviceResponse, BedtimeMode, SleepRecord, SleepSummary};
    use chrono::{NaiveDate, NaiveTime};

    fn request(days: u32) -> GenerateRequest {
        GenerateRequest::new(
            days,
            0,
            BedtimeMode::Random,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(0, 30, 0).unwrap(),
        )
    }

    fn record(day: u32) -> SleepRecord {
        SleepRecord {
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            start_time: "22:45".into(),
            wake_time: "06:30".into(),
            duration_hours: 7.75,
            mood: 4,
        }
    }

    fn http_500() -> BackendError {
        BackendError::Http {
            status: 500,
            message: "internal error".into(),
        }
    }

    #[tokio::test]
    async fn generate_success_replaces_batch() {
        let mut backend = MockSleepBackend::new();
        backend
            .expect_generate_sleep_data()
            .times(1)
            .returning(|_| Ok(vec![record(1), record(2)]));

        let mut session = Session::new();
        generate(&backend, &mut session, &request(2)).await.unwrap();
        assert_eq!(session.records().len(), 2);
        assert_eq!(
            session.last_event().unwrap().event_type,
            EventType::Success
        );
    }

    #[tokio::test]
    /// A failed generation leaves the prior batch untouched.
    async fn generate_failure_keeps_prior_state() {
        let mut backend = MockSleepBackend::new();
        backend
            .expect_generate_sleep_data()
            .withf(|r| r.days == 1)
            .times(1)
            .returning(|_| Ok(vec![record(1)]));
        backend
            .expect_generate_sleep_data()
            .withf(|r| r.days == 5)
            .times(1)
            .returning(|_| Err(http_500()));

        let mut session = Session::new();
        generate(&backend, &mut session, &request(1)).await.unwrap();
        let before: Vec<_> = session.records().to_vec();

        let result = generate(&backend, &mut session, &request(5)).await;
        assert!(result.is_err());
        assert_eq!(session.records(), before.as_slice());
        assert_eq!(session.last_event().unwrap().event_type, EventType::Error);
    }

    #[tokio::test]
    /// First-run failure: the batch stays empty.
    async fn generate_failure_on_empty_session() {
        let mut backend = MockSleepBackend::new();
        backend
            .expect_generate_sleep_data()
            .times(1)
            .returning(|_| Err(http_500()));

        let mut session = Session::new();
        let result = generate(&backend, &mut session, &request(7)).await;
        assert!(result.is_err());
        assert!(!session.has_data());
    }

    #[tokio::test]
    /// No summary call may be issued while the batch is empty.
    async fn summary_skipped_without_data() {
        let mut backend = MockSleepBackend::new();
        backend.expect_get_sleep_summary().times(0);

        let mut session = Session::new();
        fetch_summary(&backend, &mut session).await.unwrap();
        assert!(session.summary().is_none());
    }

    #[tokio::test]
    async fn summary_fetched_with_data() {
        let mut backend = MockSleepBackend::new();
        backend.expect_get_sleep_summary().times(1).returning(|| {
            Ok(SleepSummary {
                total_hours: 56.0,
                average_duration: 8.0,
                min_duration: 6.5,
                max_duration: 9.0,
                duration_mood_correlation: 0.42,
                duration_trend: "improving".into(),
            })
        });

        let mut session = Session::new();
        session.replace_records(vec![record(1)]);
        fetch_summary(&backend, &mut session).await.unwrap();
        let summary = session.summary().unwrap();
        assert_eq!(summary.correlation_display(), "0.42");
        assert_eq!(summary.duration_trend, "improving");
    }

    #[tokio::test]
    /// A failed summary fetch shows an error but keeps the batch renderable.
    async fn summary_failure_keeps_records() {
        let mut backend = MockSleepBackend::new();
        backend
            .expect_get_sleep_summary()
            .times(1)
            .returning(|| Err(http_500()));

        let mut session = Session::new();
        session.replace_records(vec![record(1)]);
        let result = fetch_summary(&backend, &mut session).await;
        assert!(result.is_err());
        assert!(session.has_data());
        assert!(session.summary().is_none());
    }

    #[tokio::test]
    /// Blank and whitespace-only questions warn locally with zero calls.
    async fn blank_question_issues_no_call() {
        let mut backend = MockSleepBackend::new();
        backend.expect_query_advice().times(0);

        let mut session = Session::new();
        for question in ["", "   ", "\t\n"] {
            let result = ask_advice(&backend, &mut session, question).await;
            assert!(matches!(result, Err(ActionError::InvalidInput(_))));
            assert_eq!(
                session.last_event().unwrap().event_type,
                EventType::Warning
            );
        }
        assert!(session.advice().is_none());
    }

    #[tokio::test]
    /// A successful advice call stores the exact answer and sources received.
    async fn advice_success_stores_response() {
        let sources = vec![
            serde_json::json!({"title": "Sleep hygiene basics", "score": 0.91}),
            serde_json::json!({"title": "Caffeine timing", "score": 0.77}),
        ];
        let expected = sources.clone();

        let mut backend = MockSleepBackend::new();
        backend.expect_query_advice().times(1).returning(move |_| {
            Ok(AdviceResponse {
                answer: "Keep a consistent bedtime.".into(),
                sources: sources.clone(),
            })
        });

        let mut session = Session::new();
        ask_advice(&backend, &mut session, "How do I sleep better?")
            .await
            .unwrap();
        let advice = session.advice().unwrap();
        assert_eq!(advice.answer, "Keep a consistent bedtime.");
        assert_eq!(advice.sources, expected);
    }
}
