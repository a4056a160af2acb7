//! HTTP client for the chatbot-answer endpoints.

use async_trait::async_trait;
use cbot_core::types::DbId;

use crate::types::{AnswerListPayload, AnswerRecord, AnswerStatus};

/// Transport-level failure of an API call. The panel collapses every
/// variant into the same generic user notification; the distinction only
/// feeds logging.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("server returned {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("failed to parse response: {0}")]
    ParseFailed(String),
}

/// The three server operations the panel performs.
#[async_trait]
pub trait AnswersApi: Send + Sync {
    async fn fetch_answers(&self) -> Result<Vec<AnswerRecord>, ClientError>;
    async fn update_status(&self, id: DbId, status: AnswerStatus) -> Result<(), ClientError>;
    async fn update_order(&self, order: &[DbId]) -> Result<(), ClientError>;
}

/// [`AnswersApi`] implementation over reqwest.
#[derive(Debug, Clone)]
pub struct AnswersClient {
    base_url: String,
    http: reqwest::Client,
}

impl AnswersClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:5000`.
    ///
    /// The client keeps a cookie store so session credentials ride along
    /// on every request.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to construct HTTP client");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl AnswersApi for AnswersClient {
    async fn fetch_answers(&self) -> Result<Vec<AnswerRecord>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/chatbot-answers"))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }

        let payload: AnswerListPayload = response
            .json()
            .await
            .map_err(|e| ClientError::ParseFailed(e.to_string()))?;

        Ok(payload.answers)
    }

    async fn update_status(&self, id: DbId, status: AnswerStatus) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/chatbot-answers/status/{id}")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }
        Ok(())
    }

    async fn update_order(&self, order: &[DbId]) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url("/api/chatbot-answers/order"))
            .json(&serde_json::json!({ "order": order }))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
