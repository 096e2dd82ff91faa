//! Sleep Tracker Backend Client
//!
//! Reqwest implementation of the backend trait. Every call is a single
//! best-effort request with a fixed timeout; there are no retries.

use crate::backend::SleepBackend;
use crate::backend::error::BackendError;
use crate::consts::BACKEND_TIMEOUT;
use crate::models::{
    AdviceRequest, AdviceResponse, GenerateRequest, GenerateResponse, SleepRecord, SleepSummary,
    SummaryResponse,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("sleepdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(BACKEND_TIMEOUT)
                .timeout(BACKEND_TIMEOUT)
                .build()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            log::debug!("backend returned status {}", response.status());
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post_request<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl SleepBackend for ApiClient {
    async fn generate_sleep_data(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<SleepRecord>, BackendError> {
        let response: GenerateResponse = self.post_request("generate-sleep-data", request).await?;
        Ok(response.sleep_data)
    }

    async fn get_sleep_summary(&self) -> Result<SleepSummary, BackendError> {
        let response: SummaryResponse = self.get_request("get-sleep-summary").await?;
        Ok(response.summary)
    }

    async fn query_advice(&self, question: &str) -> Result<AdviceResponse, BackendError> {
        let request = AdviceRequest {
            question: question.to_string(),
        };
        self.post_request("query-advice", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_double_slash() {
        let client = ApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            client.build_url("/generate-sleep-data"),
            "http://127.0.0.1:8000/generate-sleep-data"
        );
        assert_eq!(
            client.build_url("get-sleep-summary"),
            "http://127.0.0.1:8000/get-sleep-summary"
        );
    }

    #[tokio::test]
    /// An unreachable backend surfaces as a transport error, not a panic.
    async fn unreachable_backend_is_an_error() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let client = ApiClient::new("http://192.0.2.1:1").unwrap();
        let result = client.get_sleep_summary().await;
        assert!(result.is_err());
    }
}
