//! Request and response shapes for the assistant backend.
//!
//! Response payload fields are all `Option` so that a 2xx body missing the
//! field deserializes cleanly instead of erroring; the client maps absent or
//! empty values to `None`.

use serde::{Deserialize, Serialize};

use opsmate_core::TrainingRecord;

// ---------------------------------------------------------------------------
// Public request types
// ---------------------------------------------------------------------------

/// Everything needed to submit a pull request for review.
///
/// `pr_url` must already have passed extraction; the client does not
/// re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub pr_url: String,
    pub branch: String,
    pub clone_url: String,
}

// ---------------------------------------------------------------------------
// Wire types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct QueryBody<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AskResponse {
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrainResponse {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub history: Option<Vec<TrainingRecord>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestResponse {
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateCommentResponse {
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentBody<'a> {
    pub pr_url: &'a str,
    pub comment: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PrUrlBody<'a> {
    pub pr_url: &'a str,
}

// The webhook payload mirrors the subset of GitHub's pull_request event the
// backend consumes.

#[derive(Debug, Serialize)]
pub(crate) struct WebhookPayload<'a> {
    pub pull_request: WebhookPullRequest<'a>,
    pub repository: WebhookRepository<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookPullRequest<'a> {
    pub html_url: &'a str,
    pub head: WebhookHead<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookHead<'a> {
    #[serde(rename = "ref")]
    pub branch: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookRepository<'a> {
    pub clone_url: &'a str,
}

impl<'a> WebhookPayload<'a> {
    pub fn from_review(review: &'a ReviewRequest) -> Self {
        Self {
            pull_request: WebhookPullRequest {
                html_url: &review.pr_url,
                head: WebhookHead {
                    branch: &review.branch,
                },
            },
            repository: WebhookRepository {
                clone_url: &review.clone_url,
            },
        }
    }
}
