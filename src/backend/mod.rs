use crate::models::{AdviceResponse, GenerateRequest, SleepRecord, SleepSummary};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

use error::BackendError;

#[cfg(test)]
use mockall::automock;

/// The three REST operations the dashboard consumes.
///
/// Kept behind a trait so actions can be exercised against a mock backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SleepBackend: Send + Sync {
    /// Ask the backend to simulate a batch of sleep records.
    async fn generate_sleep_data(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<SleepRecord>, BackendError>;

    /// Fetch summary statistics for the most recently generated data.
    async fn get_sleep_summary(&self) -> Result<SleepSummary, BackendError>;

    /// Ask a natural-language question against the RAG pipeline.
    async fn query_advice(&self, question: &str) -> Result<AdviceResponse, BackendError>;
}
