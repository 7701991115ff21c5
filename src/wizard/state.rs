//! Wizard state as a closed sum type

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::error::SimulationError;
use crate::projection::Engine;

/// Identifier of one submission; strictly increasing per wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field flagged after a generator rejected the submitted form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputIssue {
    pub field: &'static str,
    pub message: String,
}

impl InputIssue {
    pub fn from_error(err: &SimulationError) -> Self {
        match err {
            SimulationError::InvalidInput { field, reason } => Self {
                field: *field,
                message: reason.clone(),
            },
            other => Self {
                field: "form",
                message: other.to_string(),
            },
        }
    }
}

/// Exactly one of the three wizard steps
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState<I, R> {
    /// Editable form, optionally carrying the issue from the last rejected run
    Input { form: I, issue: Option<InputIssue> },

    /// Simulated computation in flight for `snapshot`
    Pending { snapshot: I, request_id: RequestId },

    /// Finished projection for `snapshot`
    Result { snapshot: I, result: R },
}

impl<I, R> WizardState<I, R> {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Input { .. } => "input",
            WizardState::Pending { .. } => "pending",
            WizardState::Result { .. } => "result",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, WizardState::Input { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, WizardState::Pending { .. })
    }

    /// The live form in Input, otherwise the captured snapshot
    pub fn inputs(&self) -> &I {
        match self {
            WizardState::Input { form, .. } => form,
            WizardState::Pending { snapshot, .. } => snapshot,
            WizardState::Result { snapshot, .. } => snapshot,
        }
    }

    pub fn result(&self) -> Option<&R> {
        match self {
            WizardState::Result { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn issue(&self) -> Option<&InputIssue> {
        match self {
            WizardState::Input { issue, .. } => issue.as_ref(),
            _ => None,
        }
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            WizardState::Pending { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }
}

/// Handed to the scheduler when a wizard enters Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTicket {
    pub engine: Engine,
    pub request_id: RequestId,
    pub latency: Duration,
}

/// Outcome of a fired Pending timer
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Wizard moved to Result
    Completed,
    /// Generator rejected the snapshot; wizard is back in Input with the field flagged
    Rejected(SimulationError),
    /// Timer no longer matches the wizard's Pending request; nothing changed
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_from_invalid_input() {
        let err = SimulationError::invalid_input("principal", "value is empty");
        let issue = InputIssue::from_error(&err);
        assert_eq!(issue.field, "principal");
        assert_eq!(issue.message, "value is empty");
    }

    #[test]
    fn test_state_accessors() {
        let state: WizardState<&str, u32> = WizardState::Pending {
            snapshot: "form",
            request_id: RequestId(3),
        };
        assert_eq!(state.name(), "pending");
        assert_eq!(*state.inputs(), "form");
        assert_eq!(state.pending_request(), Some(RequestId(3)));
        assert!(state.result().is_none());

        let done: WizardState<&str, u32> = WizardState::Result {
            snapshot: "form",
            result: 7,
        };
        assert_eq!(done.result(), Some(&7));
        assert_eq!(RequestId(3).to_string(), "#3");
    }
}
