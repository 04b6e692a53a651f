use tracing::{debug, warn};

use opsmate_api::AssistantBackend;
use opsmate_core::TrainingRecord;

use crate::request::RequestState;

/// Default informational message when the backend accepts training data but
/// sends no message of its own.
const TRAINING_SAVED_MESSAGE: &str = "Training saved";

/// Server-backed store of training records.
///
/// The server owns the canonical list; this store never inserts locally
/// without a confirmed remote mutation. Selection is a pure local UI concern
/// and always refers to a record currently present in the sequence.
pub struct HistoryStore {
    records: Vec<TrainingRecord>,
    selected: Option<usize>,
    fetch: RequestState<()>,
    train: RequestState<String>,
    clear: RequestState<()>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected: None,
            fetch: RequestState::new(),
            train: RequestState::new(),
            clear: RequestState::new(),
        }
    }

    /// Create a store and perform the session-start refresh.
    pub async fn load<B>(backend: &B) -> Self
    where
        B: AssistantBackend + ?Sized,
    {
        let mut store = Self::new();
        store.refresh(backend).await;
        store
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    pub fn selected(&self) -> Option<&TrainingRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn fetch_state(&self) -> &RequestState<()> {
        &self.fetch
    }

    pub fn train_state(&self) -> &RequestState<String> {
        &self.train
    }

    pub fn clear_state(&self) -> &RequestState<()> {
        &self.clear
    }

    /// Point the selection at a record of the current sequence. Out-of-range
    /// indices are a no-op.
    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected = Some(index);
        }
    }

    /// Select by value: a no-op when the record is not in the sequence.
    pub fn select_record(&mut self, record: &TrainingRecord) {
        if let Some(index) = self.records.iter().position(|r| r == record) {
            self.selected = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the local sequence with the server's current list.
    ///
    /// On failure the prior sequence is kept. A selection that no longer
    /// points inside the new list is cleared.
    pub async fn refresh<B>(&mut self, backend: &B)
    where
        B: AssistantBackend + ?Sized,
    {
        self.fetch.begin();
        match backend.training_history().await {
            Ok(records) => {
                debug!(count = records.len(), "refreshed training history");
                self.records = records;
                if self.selected.is_some_and(|i| i >= self.records.len()) {
                    self.selected = None;
                }
                self.fetch.succeed(());
            }
            Err(e) => {
                warn!("Failed to fetch history: {e}");
                self.fetch.fail(format!("Failed to fetch history: {e}"));
            }
        }
    }

    /// Submit one training record.
    ///
    /// Blank (post-trim) issue or resolution is rejected locally without a
    /// network call; `false` is returned and no state changes. A successful
    /// submission triggers exactly one refresh; a failed one leaves the
    /// sequence untouched.
    pub async fn submit<B>(&mut self, backend: &B, record: TrainingRecord) -> bool
    where
        B: AssistantBackend + ?Sized,
    {
        if record.issue.trim().is_empty() || record.resolution.trim().is_empty() {
            return false;
        }

        self.train.begin();
        match backend.train(&record).await {
            Ok(message) => {
                self.train
                    .succeed(message.unwrap_or_else(|| TRAINING_SAVED_MESSAGE.to_string()));
                self.refresh(backend).await;
            }
            Err(e) => {
                warn!("training submission failed: {e}");
                self.train.fail(format!("Failed to submit training data: {e}"));
            }
        }
        true
    }

    /// Drop all training history.
    ///
    /// On success the sequence is emptied, the selection cleared, and the
    /// server list re-fetched; on failure both are unchanged.
    pub async fn clear<B>(&mut self, backend: &B)
    where
        B: AssistantBackend + ?Sized,
    {
        self.clear.begin();
        match backend.clear_training_history().await {
            Ok(()) => {
                self.records.clear();
                self.selected = None;
                self.clear.succeed(());
                self.refresh(backend).await;
            }
            Err(e) => {
                warn!("failed to clear history: {e}");
                self.clear.fail(format!("Failed to clear history: {e}"));
            }
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
