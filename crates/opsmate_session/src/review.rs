use tracing::warn;

use opsmate_api::{AssistantBackend, ReviewRequest};
use opsmate_core::PrRef;

use crate::pr_url;
use crate::request::RequestState;

/// Validation-only notice; surfaced without contacting the backend.
pub const INVALID_PR_URL_MESSAGE: &str = "Invalid PR URL format.";

pub const REVIEW_SUBMITTED_MESSAGE: &str = "✅ Review request submitted successfully.";
pub const REVIEW_FAILED_MESSAGE: &str = "❌ Failed to submit the request.";
pub const COMMENT_FAILED_MESSAGE: &str = "❌ Failed to post comment.";
pub const GENERATE_FAILED_MESSAGE: &str = "❌ Failed to generate comment.";

/// Substituted when comment generation succeeded but returned no text.
pub const NO_COMMENT_PLACEHOLDER: &str = "❌ No comment generated";

/// Pull-request review workflow.
///
/// Holds the form fields and three independent request states: submitting
/// the PR for review, posting a comment, and generating AI comment text.
/// All three validate the PR URL through [`pr_url::extract`] before any
/// dispatch; a malformed URL settles the action as failed locally.
pub struct ReviewSession {
    pr_url: String,
    branch: String,
    clone_url: String,
    submit: RequestState<String>,
    comment: RequestState<()>,
    generate: RequestState<String>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            pr_url: String::new(),
            branch: String::new(),
            clone_url: String::new(),
            submit: RequestState::new(),
            comment: RequestState::new(),
            generate: RequestState::new(),
        }
    }

    // ── Form fields ────────────────────────────────────────────────

    pub fn pr_url(&self) -> &str {
        &self.pr_url
    }

    pub fn set_pr_url(&mut self, url: impl Into<String>) {
        self.pr_url = url.into();
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    pub fn set_clone_url(&mut self, clone_url: impl Into<String>) {
        self.clone_url = clone_url.into();
    }

    /// Parsed identifiers for the current URL, if it extracts.
    pub fn pr_ref(&self) -> Option<PrRef> {
        pr_url::extract(&self.pr_url)
    }

    /// Strict whole-string validity, for display indication only.
    pub fn url_looks_valid(&self) -> bool {
        pr_url::is_valid_pr_url(&self.pr_url)
    }

    // ── Request states ─────────────────────────────────────────────

    pub fn submit_state(&self) -> &RequestState<String> {
        &self.submit
    }

    pub fn comment_state(&self) -> &RequestState<()> {
        &self.comment
    }

    pub fn generate_state(&self) -> &RequestState<String> {
        &self.generate
    }

    // ── Actions ────────────────────────────────────────────────────

    /// Submit the PR for review via the webhook endpoint.
    ///
    /// Returns `false` on validation failure (no dispatch); the submit state
    /// then carries the validation notice without ever entering pending.
    pub async fn submit_review<B>(&mut self, backend: &B) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if self.pr_ref().is_none() {
            self.submit.fail(INVALID_PR_URL_MESSAGE);
            return false;
        }

        self.submit.begin();
        let review = ReviewRequest {
            pr_url: self.pr_url.clone(),
            branch: self.branch.clone(),
            clone_url: self.clone_url.clone(),
        };
        match backend.submit_review(&review).await {
            Ok(()) => self.submit.succeed(REVIEW_SUBMITTED_MESSAGE.to_string()),
            Err(e) => {
                warn!("review submission failed: {e}");
                self.submit.fail(REVIEW_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Post a comment onto the PR.
    ///
    /// A blank (post-trim) comment is rejected quietly; a malformed URL
    /// settles the comment state as failed without dispatch.
    pub async fn post_comment<B>(&mut self, backend: &B, comment: &str) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if comment.trim().is_empty() {
            return false;
        }
        if self.pr_ref().is_none() {
            self.comment.fail(INVALID_PR_URL_MESSAGE);
            return false;
        }

        self.comment.begin();
        match backend.post_comment(&self.pr_url, comment).await {
            Ok(()) => self.comment.succeed(()),
            Err(e) => {
                warn!("comment post failed: {e}");
                self.comment.fail(COMMENT_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Ask the backend to draft a review comment for the PR.
    pub async fn generate_comment<B>(&mut self, backend: &B) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if self.pr_ref().is_none() {
            self.generate.fail(INVALID_PR_URL_MESSAGE);
            return false;
        }

        self.generate.begin();
        match backend.generate_comment(&self.pr_url).await {
            Ok(Some(text)) => self.generate.succeed(text),
            Ok(None) => self.generate.succeed(NO_COMMENT_PLACEHOLDER.to_string()),
            Err(e) => {
                warn!("comment generation failed: {e}");
                self.generate.fail(GENERATE_FAILED_MESSAGE);
            }
        }
        true
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}
