//! Timestamped record of the phases a step went through.
//!
//! The history is diagnostic only. Nothing in it feeds the context that a
//! step hands to the next one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseChange<S: State> {
    /// Phase left behind
    pub from: S,
    /// Phase entered
    pub to: S,
    /// When the change happened
    pub at: DateTime<Utc>,
    /// Submission attempt the change belongs to (0 before the first submit)
    pub attempt: usize,
}

/// Ordered, append-only history of phase changes.
///
/// `record` never mutates: it returns a new history with the change
/// appended.
///
/// # Example
///
/// ```rust
/// use checkout_step::core::{PhaseChange, PhaseHistory};
/// use checkout_step::step::StepPhase;
/// use chrono::Utc;
///
/// let history = PhaseHistory::new().record(PhaseChange {
///     from: StepPhase::Waiting,
///     to: StepPhase::Idle,
///     at: Utc::now(),
///     attempt: 0,
/// });
///
/// assert_eq!(history.path(), vec![&StepPhase::Waiting, &StepPhase::Idle]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    changes: Vec<PhaseChange<S>>,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Return a new history with `change` appended.
    pub fn record(&self, change: PhaseChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Phases visited, starting with the first `from`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|c| &c.to));
        path
    }

    /// Number of times an error phase was entered.
    pub fn failures(&self) -> usize {
        self.changes.iter().filter(|c| c.to.is_error()).count()
    }

    /// Most recent phase, if anything was recorded.
    pub fn last(&self) -> Option<&S> {
        self.changes.last().map(|c| &c.to)
    }

    /// Time between the first and last change.
    pub fn elapsed(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    pub fn changes(&self) -> &[PhaseChange<S>] {
        &self.changes
    }
}
