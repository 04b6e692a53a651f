use tracing::warn;
use uuid::Uuid;

use opsmate_api::AssistantBackend;
use opsmate_core::ChatMessage;

use crate::request::RequestState;

/// Substituted when the backend answered but carried no suggestion.
pub const NO_SUGGESTION_PLACEHOLDER: &str = "❌ No suggestion found";

/// Substituted when the suggestion request failed outright.
pub const SUGGESTION_FAILED_PLACEHOLDER: &str = "❌ Failed to fetch suggestion.";

/// A conversational suggestion thread.
///
/// The message log is append-only and grows in dispatch order: the user
/// message lands synchronously when `ask` is invoked, and exactly one bot
/// message lands at settlement — the suggestion on success, a placeholder
/// otherwise. Failures become bot messages so the thread stays coherent.
pub struct ChatSession {
    id: String,
    messages: Vec<ChatMessage>,
    suggest: RequestState<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            suggest: RequestState::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// State of the underlying suggestion action.
    pub fn suggest_state(&self) -> &RequestState<String> {
        &self.suggest
    }

    /// True from the moment `ask` dispatches until the bot message is
    /// appended; gates the typing indicator in the rendering layer.
    pub fn is_thinking(&self) -> bool {
        self.suggest.is_pending()
    }

    /// Ask for a suggested resolution.
    ///
    /// Blank (post-trim) input is rejected locally: nothing is appended, no
    /// network call is made, and `false` is returned. Otherwise the user
    /// message is appended before the call starts and the method returns
    /// `true` once the bot message has settled.
    pub async fn ask<B>(&mut self, backend: &B, query: &str) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if query.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(query));
        self.suggest.begin();

        // The bot message is appended before the state settles, so the
        // thinking flag never drops with the append still outstanding.
        match backend.suggest(query).await {
            Ok(Some(suggestion)) => {
                self.messages.push(ChatMessage::bot(suggestion.clone()));
                self.suggest.succeed(suggestion);
            }
            Ok(None) => {
                self.messages.push(ChatMessage::bot(NO_SUGGESTION_PLACEHOLDER));
                self.suggest.succeed(NO_SUGGESTION_PLACEHOLDER.to_string());
            }
            Err(e) => {
                warn!("suggestion request failed: {e}");
                self.messages
                    .push(ChatMessage::bot(SUGGESTION_FAILED_PLACEHOLDER));
                self.suggest.fail(SUGGESTION_FAILED_PLACEHOLDER);
            }
        }
        true
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
