//! Operation feedback: every ledger operation yields a human-readable
//! message plus a tri-state outcome, so callers never have to interpret
//! structured error codes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    pub message: String,
    pub outcome: Outcome,
}

impl Feedback {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            outcome: Outcome::Success,
        }
    }

    pub fn warning<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            outcome: Outcome::Warning,
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            outcome: Outcome::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
