//! In-memory backend for orchestration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use opsmate_api::{ApiError, AssistantBackend, ReviewRequest};
use opsmate_core::TrainingRecord;

/// Scripted outcome for one backend call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// 2xx response; `None` models a success body missing its payload field.
    Ok(Option<String>),
    /// Transport failure with the given message.
    Err(String),
}

impl Scripted {
    pub fn ok(text: &str) -> Self {
        Self::Ok(Some(text.to_string()))
    }

    fn to_result(&self) -> Result<Option<String>, ApiError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Err(message) => Err(ApiError::Network(message.clone())),
        }
    }
}

/// Backend double with scripted responses and per-endpoint call counters.
///
/// The training history behaves like the real server: a successful `train`
/// appends to it, `clear_training_history` empties it.
pub struct MockBackend {
    pub ask_response: Scripted,
    pub suggest_response: Scripted,
    pub generate_comment_response: Scripted,
    pub train_fails: bool,
    pub history_fails: bool,
    pub clear_fails: bool,
    pub review_fails: bool,
    pub comment_fails: bool,

    pub server_history: Mutex<Vec<TrainingRecord>>,

    pub ask_calls: AtomicUsize,
    pub suggest_calls: AtomicUsize,
    pub train_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub clear_calls: AtomicUsize,
    pub review_calls: AtomicUsize,
    pub comment_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
    pub analyze_calls: AtomicUsize,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            ask_response: Scripted::Ok(None),
            suggest_response: Scripted::Ok(None),
            generate_comment_response: Scripted::Ok(None),
            train_fails: false,
            history_fails: false,
            clear_fails: false,
            review_fails: false,
            comment_fails: false,
            server_history: Mutex::new(Vec::new()),
            ask_calls: AtomicUsize::new(0),
            suggest_calls: AtomicUsize::new(0),
            train_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            clear_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
            comment_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
            analyze_calls: AtomicUsize::new(0),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seeded_history(records: Vec<TrainingRecord>) -> Self {
        let backend = Self::default();
        *backend.server_history.lock().unwrap() = records;
        backend
    }
}

#[async_trait]
impl AssistantBackend for MockBackend {
    async fn ask(&self, _query: &str) -> Result<Option<String>, ApiError> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        self.ask_response.to_result()
    }

    async fn train(&self, record: &TrainingRecord) -> Result<Option<String>, ApiError> {
        self.train_calls.fetch_add(1, Ordering::SeqCst);
        if self.train_fails {
            return Err(ApiError::Network("train failed".into()));
        }
        self.server_history.lock().unwrap().push(record.clone());
        Ok(Some("Training saved".into()))
    }

    async fn training_history(&self) -> Result<Vec<TrainingRecord>, ApiError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if self.history_fails {
            return Err(ApiError::Network("history failed".into()));
        }
        Ok(self.server_history.lock().unwrap().clone())
    }

    async fn clear_training_history(&self) -> Result<(), ApiError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if self.clear_fails {
            return Err(ApiError::Network("clear failed".into()));
        }
        self.server_history.lock().unwrap().clear();
        Ok(())
    }

    async fn suggest(&self, _query: &str) -> Result<Option<String>, ApiError> {
        self.suggest_calls.fetch_add(1, Ordering::SeqCst);
        self.suggest_response.to_result()
    }

    async fn submit_review(&self, _review: &ReviewRequest) -> Result<(), ApiError> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        if self.review_fails {
            return Err(ApiError::Network("review failed".into()));
        }
        Ok(())
    }

    async fn post_comment(&self, _pr_url: &str, _comment: &str) -> Result<(), ApiError> {
        self.comment_calls.fetch_add(1, Ordering::SeqCst);
        if self.comment_fails {
            return Err(ApiError::Network("comment failed".into()));
        }
        Ok(())
    }

    async fn generate_comment(&self, _pr_url: &str) -> Result<Option<String>, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.generate_comment_response.to_result()
    }

    async fn analyze_log(&self, _query: &str) -> Result<Option<String>, ApiError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        self.ask_response.to_result()
    }

    async fn upload_document(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<Option<String>, ApiError> {
        self.ask_response.to_result()
    }
}
