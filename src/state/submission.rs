use tracing::{info, warn};

use crate::error::{Error, Result};

/// Lifecycle of the single network call a wizard makes at its terminal step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Inline error message of the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enters `Submitting`, refusing when a request is already in flight.
    pub fn begin(&mut self) -> Result<()> {
        if self.is_submitting() {
            warn!("submission already in flight, ignoring");
            return Err(Error::SubmissionInFlight);
        }
        *self = SubmissionState::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("submission succeeded");
        *self = SubmissionState::Succeeded(message);
    }

    /// Records the failure as a display string, re-enabling submit.
    pub fn fail(&mut self, err: &Error, fallback: &str) {
        let message = err.user_message(fallback);
        warn!("submission failed: {}", message);
        *self = SubmissionState::Failed(message);
    }

    /// Drops a stale failure message once the user edits a field.
    pub fn clear_error(&mut self) {
        if matches!(self, SubmissionState::Failed(_)) {
            *self = SubmissionState::Idle;
        }
    }
}
