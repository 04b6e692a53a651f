use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use opsmate_core::{BackendConfig, TrainingRecord};

use crate::wire::{
    AskResponse, CommentBody, GenerateCommentResponse, HistoryResponse, PrUrlBody, QueryBody,
    ReviewRequest, SuggestResponse, TrainResponse, UploadResponse, WebhookPayload,
};
use crate::{ApiError, AssistantBackend};

/// Default backend address when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the ops-assistant HTTP service.
///
/// All calls are JSON over a fixed base address. The client holds no session
/// state; each method is a single request/response cycle.
pub struct AssistantClient {
    base_url: String,
    client: reqwest::Client,
}

impl AssistantClient {
    /// Create a client against the default local backend, with no timeout.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, None)
    }

    /// Create a client from backend configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Create a client against a custom base URL.
    ///
    /// `timeout` of `None` leaves requests unbounded; a hung backend call
    /// then holds its action in the pending phase indefinitely.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Return the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Internal helpers ───────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_checked(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.send_checked(self.client.get(&url)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self.send_checked(self.client.post(&url).json(body)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// POST where only the status code matters.
    async fn post_for_status<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send_checked(request).await?;
        Ok(())
    }
}

/// Treat an absent or empty payload field as "no result".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[async_trait]
impl AssistantBackend for AssistantClient {
    async fn ask(&self, query: &str) -> Result<Option<String>, ApiError> {
        let data: AskResponse = self.post_json("/ask", &QueryBody { query }).await?;
        Ok(non_empty(data.response))
    }

    async fn train(&self, record: &TrainingRecord) -> Result<Option<String>, ApiError> {
        let data: TrainResponse = self.post_json("/train-model", record).await?;
        Ok(non_empty(data.message))
    }

    async fn training_history(&self) -> Result<Vec<TrainingRecord>, ApiError> {
        let data: HistoryResponse = self.get_json("/get-training-history").await?;
        Ok(data.history.unwrap_or_default())
    }

    async fn clear_training_history(&self) -> Result<(), ApiError> {
        self.post_for_status::<()>("/clear-training-history", None)
            .await
    }

    async fn suggest(&self, query: &str) -> Result<Option<String>, ApiError> {
        let data: SuggestResponse = self
            .post_json("/suggest-resolution", &QueryBody { query })
            .await?;
        Ok(non_empty(data.suggestion))
    }

    async fn submit_review(&self, review: &ReviewRequest) -> Result<(), ApiError> {
        let payload = WebhookPayload::from_review(review);
        self.post_for_status("/webhook", Some(&payload)).await
    }

    async fn post_comment(&self, pr_url: &str, comment: &str) -> Result<(), ApiError> {
        let body = CommentBody { pr_url, comment };
        self.post_for_status("/comment", Some(&body)).await
    }

    async fn generate_comment(&self, pr_url: &str) -> Result<Option<String>, ApiError> {
        let data: GenerateCommentResponse = self
            .post_json("/generate-comment", &PrUrlBody { pr_url })
            .await?;
        Ok(non_empty(data.comment))
    }

    async fn analyze_log(&self, query: &str) -> Result<Option<String>, ApiError> {
        let data: AskResponse = self.post_json("/analyze-log", &QueryBody { query }).await?;
        Ok(non_empty(data.response))
    }

    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, ApiError> {
        let url = self.url("/upload");
        debug!(url = %url, file = %file_name, "uploading document");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .send_checked(self.client.post(&url).multipart(form))
            .await?;
        let data: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(non_empty(data.summary))
    }
}
