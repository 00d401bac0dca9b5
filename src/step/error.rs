//! Errors returned by the payment step.

use thiserror::Error;

/// Errors that can occur when submitting or leaving the payment form
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    /// The submit payload does not have the form's shape
    #[error("Malformed submission: {0}")]
    MalformedSubmission(String),

    /// Submit arrived while the step could not take it
    #[error("Step does not accept submissions while '{phase}'")]
    NotAccepting { phase: String },

    /// Cancel arrived while no form was on screen
    #[error("Step cannot be cancelled while '{phase}'")]
    NotCancellable { phase: String },
}
