use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chat messages
// ---------------------------------------------------------------------------

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in a conversational session's message log.
///
/// Messages are append-only: once pushed onto a session they are never
/// mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a bot-authored message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Training records
// ---------------------------------------------------------------------------

/// One issue/resolution pair submitted as training data.
///
/// Immutable once accepted by the backend; the server owns the canonical
/// list and its ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub issue: String,
    pub resolution: String,
}

impl TrainingRecord {
    pub fn new(issue: impl Into<String>, resolution: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            resolution: resolution.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pull request references
// ---------------------------------------------------------------------------

/// Structured identifiers parsed out of a GitHub pull request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hello");
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "hello");

        let bot = ChatMessage::bot("hi there");
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(bot.text, "hi there");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_training_record_round_trip() {
        let record = TrainingRecord::new("App crashed with OOM error", "Raise the heap limit");
        let json = serde_json::to_string(&record).unwrap();
        let back: TrainingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_pr_ref_equality() {
        let a = PrRef {
            owner: "octocat".into(),
            repo: "hello-world".into(),
            number: 42,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
