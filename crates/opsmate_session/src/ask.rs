use tracing::warn;

use opsmate_api::AssistantBackend;

use crate::request::RequestState;

/// Failure notice shown when the ask request cannot reach the backend.
pub const BACKEND_ERROR_NOTICE: &str = "❌ Error connecting to backend.";

/// Substituted when the backend answered but carried no response text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "❌ No response found";

/// Which endpoint a free-form question is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskMode {
    /// General question answering.
    #[default]
    General,
    /// Log-focused analysis against the indexed logs.
    LogAnalysis,
}

/// Single-response question panel.
///
/// Unlike [`crate::ChatSession`] there is no message log: each dispatch
/// replaces the prior response or error.
pub struct AskPanel {
    mode: AskMode,
    state: RequestState<String>,
}

impl AskPanel {
    pub fn new() -> Self {
        Self::with_mode(AskMode::General)
    }

    pub fn with_mode(mode: AskMode) -> Self {
        Self {
            mode,
            state: RequestState::new(),
        }
    }

    pub fn mode(&self) -> AskMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AskMode) {
        self.mode = mode;
    }

    pub fn state(&self) -> &RequestState<String> {
        &self.state
    }

    /// The latest response text, when the last dispatch succeeded.
    pub fn response(&self) -> Option<&str> {
        self.state.result().map(String::as_str)
    }

    /// Submit a question.
    ///
    /// Blank (post-trim) input is rejected locally: no phase transition, no
    /// network call, `false` returned.
    pub async fn submit<B>(&mut self, backend: &B, query: &str) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if query.trim().is_empty() {
            return false;
        }

        self.state.begin();
        let outcome = match self.mode {
            AskMode::General => backend.ask(query).await,
            AskMode::LogAnalysis => backend.analyze_log(query).await,
        };

        match outcome {
            Ok(Some(text)) => self.state.succeed(text),
            Ok(None) => self.state.succeed(NO_RESPONSE_PLACEHOLDER.to_string()),
            Err(e) => {
                warn!("ask request failed: {e}");
                self.state.fail(BACKEND_ERROR_NOTICE);
            }
        }
        true
    }
}

impl Default for AskPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestPhase;
    use crate::test_support::{MockBackend, Scripted};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_successful_ask_stores_response() {
        let backend = MockBackend {
            ask_response: Scripted::ok("15"),
            ..MockBackend::new()
        };
        let mut panel = AskPanel::new();

        assert!(panel.submit(&backend, "What is 10 plus 5?").await);

        assert_eq!(panel.state().phase(), RequestPhase::Succeeded);
        assert_eq!(panel.response(), Some("15"));
    }

    #[tokio::test]
    async fn test_backend_error_stores_fixed_notice() {
        let backend = MockBackend {
            ask_response: Scripted::Err("connection refused".into()),
            ..MockBackend::new()
        };
        let mut panel = AskPanel::new();

        panel.submit(&backend, "hello?").await;

        assert_eq!(panel.state().phase(), RequestPhase::Failed);
        assert_eq!(panel.state().error(), Some(BACKEND_ERROR_NOTICE));
        assert!(panel.response().is_none());
    }

    #[tokio::test]
    async fn test_missing_response_field_is_soft_placeholder() {
        let backend = MockBackend::new();
        let mut panel = AskPanel::new();

        panel.submit(&backend, "anything").await;

        // Semantically empty success is not an error phase.
        assert_eq!(panel.state().phase(), RequestPhase::Succeeded);
        assert_eq!(panel.response(), Some(NO_RESPONSE_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_blank_query_never_dispatches() {
        let backend = MockBackend::new();
        let mut panel = AskPanel::new();

        assert!(!panel.submit(&backend, "  \n ").await);

        assert_eq!(panel.state().phase(), RequestPhase::Idle);
        assert_eq!(backend.ask_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_log_analysis_mode_routes_to_analyze_log() {
        let backend = MockBackend {
            ask_response: Scripted::ok("3 OOM kills in the last hour"),
            ..MockBackend::new()
        };
        let mut panel = AskPanel::with_mode(AskMode::LogAnalysis);

        panel.submit(&backend, "summarize the crash log").await;

        assert_eq!(backend.analyze_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.ask_calls.load(Ordering::SeqCst), 0);
        assert_eq!(panel.response(), Some("3 OOM kills in the last hour"));
    }

    #[tokio::test]
    async fn test_redispatch_replaces_prior_outcome() {
        let backend = MockBackend {
            ask_response: Scripted::ok("first"),
            ..MockBackend::new()
        };
        let mut panel = AskPanel::new();
        panel.submit(&backend, "one").await;
        assert_eq!(panel.response(), Some("first"));

        let failing = MockBackend {
            ask_response: Scripted::Err("down".into()),
            ..MockBackend::new()
        };
        panel.submit(&failing, "two").await;

        assert_eq!(panel.state().phase(), RequestPhase::Failed);
        assert!(panel.response().is_none());
    }
}
