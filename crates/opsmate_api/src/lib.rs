//! HTTP client for the remote ops-assistant service.
//!
//! The [`AssistantBackend`] trait is the seam between the orchestration layer
//! and the network: session code is written against the trait, and
//! [`AssistantClient`] is the reqwest implementation that talks to the real
//! backend.

pub mod client;
mod wire;

use async_trait::async_trait;

use opsmate_core::TrainingRecord;

pub use client::{AssistantClient, DEFAULT_BASE_URL};
pub use wire::ReviewRequest;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors the backend client may return.
///
/// A 2xx response that merely lacks an expected payload field is *not* an
/// error; those surface as `Ok(None)` from the individual calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Client error: {0}")]
    Other(String),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Unified interface to the assistant backend.
///
/// Methods returning `Option<String>` yield `None` when the response was
/// successful but the payload field was absent or empty; callers substitute
/// their own placeholder text.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Free-form question answering (`POST /ask`).
    async fn ask(&self, query: &str) -> Result<Option<String>, ApiError>;

    /// Submit one issue/resolution training pair (`POST /train-model`).
    /// Returns the backend's informational message, if any.
    async fn train(&self, record: &TrainingRecord) -> Result<Option<String>, ApiError>;

    /// Fetch the server's current training history (`GET /get-training-history`).
    async fn training_history(&self) -> Result<Vec<TrainingRecord>, ApiError>;

    /// Drop all training history on the server (`POST /clear-training-history`).
    async fn clear_training_history(&self) -> Result<(), ApiError>;

    /// Ask for an AI-suggested resolution (`POST /suggest-resolution`).
    async fn suggest(&self, query: &str) -> Result<Option<String>, ApiError>;

    /// Submit a pull request for review (`POST /webhook`).
    async fn submit_review(&self, review: &ReviewRequest) -> Result<(), ApiError>;

    /// Post a comment onto a pull request (`POST /comment`).
    async fn post_comment(&self, pr_url: &str, comment: &str) -> Result<(), ApiError>;

    /// Ask the backend to draft a review comment (`POST /generate-comment`).
    async fn generate_comment(&self, pr_url: &str) -> Result<Option<String>, ApiError>;

    /// Log-focused question answering (`POST /analyze-log`).
    async fn analyze_log(&self, query: &str) -> Result<Option<String>, ApiError>;

    /// Upload a document and receive an AI summary (`POST /upload`).
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, ApiError>;
}
