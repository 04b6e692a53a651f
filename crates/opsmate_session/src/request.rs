// ---------------------------------------------------------------------------
// Request phase
// ---------------------------------------------------------------------------

/// Lifecycle of a single orchestrated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

// ---------------------------------------------------------------------------
// RequestState
// ---------------------------------------------------------------------------

/// Tracks one in-flight request/response cycle.
///
/// Exactly one phase holds at a time. Transitions are
/// idle → pending → {succeeded | failed}; a new `begin` from a settled phase
/// resets to pending and discards the prior result and error. No history of
/// past attempts is kept.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    phase: RequestPhase,
    result: Option<T>,
    error: Option<String>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestState<T> {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            result: None,
            error: None,
        }
    }

    /// Enter the pending phase, clearing any prior result or error.
    pub fn begin(&mut self) {
        self.phase = RequestPhase::Pending;
        self.result = None;
        self.error = None;
    }

    /// Settle successfully with a result.
    pub fn succeed(&mut self, value: T) {
        self.phase = RequestPhase::Succeeded;
        self.result = Some(value);
        self.error = None;
    }

    /// Settle with a human-readable failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = RequestPhase::Failed;
        self.result = None;
        self.error = Some(message.into());
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Callers disable the triggering control while this is true.
    pub fn is_pending(&self) -> bool {
        self.phase == RequestPhase::Pending
    }

    /// True once the action has reached succeeded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, RequestPhase::Succeeded | RequestPhase::Failed)
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
