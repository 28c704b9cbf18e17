//! # Attempt State Machine
//!
//! One transaction attempt moves through
//! `Idle -> Validating -> Submitting -> Settled(success | failure)`.
//! The machine is independent of any view; views render the current
//! state and nothing else.

use chrono::{DateTime, Utc};
use std::fmt;
use teller_core::CoreError;
use teller_gateway::GatewayError;

/// Why a settled attempt failed. Views render the message only; the kind
/// exists for the orchestrator and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input failed a validation rule; no request was sent
    Validation,
    /// The server reported `success: false`
    Rejection,
    /// The request could not complete or the response was unreadable
    Transport,
}

/// Displayable failure of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    pub fn validation(err: CoreError) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: err.to_string(),
        }
    }

    /// Business rejection: the server message is surfaced verbatim when
    /// present, otherwise the flow's fallback message.
    pub fn rejection(message: Option<String>, fallback: &str) -> Self {
        Self {
            kind: FailureKind::Rejection,
            message: message.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Transport failure, normalized to the flow's generic message. The
    /// underlying error goes to the log, never to the user.
    pub fn transport(err: &GatewayError, fallback: &str) -> Self {
        tracing::warn!(%err, "gateway call failed");
        Self {
            kind: FailureKind::Transport,
            message: fallback.to_string(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Successful settlement of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            completed_at: Utc::now(),
        }
    }
}

/// Outcome of a settled attempt.
pub type Outcome = Result<Receipt, Failure>;

/// State of one transaction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptState {
    Idle,
    Validating,
    Submitting,
    Settled(Outcome),
}

impl AttemptState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AttemptState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, AttemptState::Submitting)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, AttemptState::Settled(_))
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, AttemptState::Settled(Ok(_)))
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            AttemptState::Settled(Ok(receipt)) => Some(receipt),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            AttemptState::Settled(Err(failure)) => Some(failure),
            _ => None,
        }
    }

    /// The displayable settled message, success or failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            AttemptState::Settled(Ok(receipt)) => Some(&receipt.message),
            AttemptState::Settled(Err(failure)) => Some(failure.message()),
            _ => None,
        }
    }

    /// Return to `Idle` on the next input change, clearing the settled
    /// message. Never abandons an in-flight request.
    pub fn reset(&mut self) {
        if !self.is_submitting() {
            *self = AttemptState::Idle;
        }
    }
}

impl Default for AttemptState {
    fn default() -> Self {
        AttemptState::Idle
    }
}
