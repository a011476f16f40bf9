use std::fmt;

/// Lifecycle of the contact form's submit control.
///
/// ```text
/// idle ──submit──▶ sending ──delivered──▶ success ──reset──▶ idle
///                     │    └─failed────▶ error   ──reset──▶ idle
///                     └─rejected──▶ idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} while the form is {from}")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: SubmissionStatus,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// Fields and the submit control are disabled while a request is in flight.
    pub fn is_locked(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    /// Starts a submission. Allowed from every state except `sending`.
    pub fn begin(self) -> Result<Self, TransitionError> {
        match self {
            SubmissionStatus::Sending => Err(self.refuse("submit")),
            _ => Ok(SubmissionStatus::Sending),
        }
    }

    /// Validation failed before anything was dispatched.
    pub fn abort(self) -> Result<Self, TransitionError> {
        match self {
            SubmissionStatus::Sending => Ok(SubmissionStatus::Idle),
            _ => Err(self.refuse("abort")),
        }
    }

    /// The provider answered.
    pub fn complete(self, delivered: bool) -> Result<Self, TransitionError> {
        match (self, delivered) {
            (SubmissionStatus::Sending, true) => Ok(SubmissionStatus::Success),
            (SubmissionStatus::Sending, false) => Ok(SubmissionStatus::Error),
            _ => Err(self.refuse("complete")),
        }
    }

    /// Timer-driven return to `idle` from a terminal state.
    pub fn reset(self) -> Result<Self, TransitionError> {
        match self {
            SubmissionStatus::Success | SubmissionStatus::Error => Ok(SubmissionStatus::Idle),
            _ => Err(self.refuse("reset")),
        }
    }

    fn refuse(self, action: &'static str) -> TransitionError {
        TransitionError { action, from: self }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
