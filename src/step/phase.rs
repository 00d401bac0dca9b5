//! Lifecycle phases of the payment step.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Where the payment step is in its lifecycle.
///
/// ```text
/// Waiting ──guard fails──▶ Redirected
///    │
///    └─guard passes─▶ Idle ──submit──▶ Validating ──all valid──▶ Accepted
///                      │ ▲                  │
///                      │ └── Rejected ◀─────┘ some field invalid
///                      └──cancel──▶ Cancelled
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepPhase {
    /// Guard not evaluated yet; a placeholder is shown
    Waiting,
    /// Inbound context was unusable, user sent home
    Redirected,
    /// Form shown and accepting input
    Idle,
    /// Submission being checked, input disabled
    Validating,
    /// At least one field failed
    Rejected,
    /// Outbound context handed to the next step
    Accepted,
    /// User left for home without submitting
    Cancelled,
}

impl State for StepPhase {
    fn name(&self) -> &str {
        match self {
            Self::Waiting => "Waiting",
            Self::Redirected => "Redirected",
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
            Self::Cancelled => "Cancelled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Redirected | Self::Accepted | Self::Cancelled)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}
