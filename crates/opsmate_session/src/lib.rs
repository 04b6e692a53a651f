//! Orchestration core: the state machines behind each assistant workflow.
//!
//! Every user-triggered action (ask, train, suggest, submit-review,
//! post-comment, generate-comment, fetch-history, clear-history) is tracked
//! by its own [`RequestState`]. Sessions validate input locally before
//! dispatch, so blank input or a malformed PR URL never reaches the network.

pub mod ask;
pub mod chat;
pub mod format;
pub mod history;
pub mod pr_url;
pub mod request;
pub mod review;

#[cfg(test)]
mod test_support;

pub use ask::{AskMode, AskPanel, BACKEND_ERROR_NOTICE, NO_RESPONSE_PLACEHOLDER};
pub use chat::{ChatSession, NO_SUGGESTION_PLACEHOLDER, SUGGESTION_FAILED_PLACEHOLDER};
pub use format::{Classified, classify};
pub use history::HistoryStore;
pub use pr_url::{extract, is_valid_pr_url};
pub use request::{RequestPhase, RequestState};
pub use review::{INVALID_PR_URL_MESSAGE, ReviewSession};
