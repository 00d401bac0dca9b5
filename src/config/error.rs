//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading a `StepConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape
    #[error("Step configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A navigation target is blank
    #[error("Navigation path '{field}' must not be empty")]
    EmptyPath { field: &'static str },
}
