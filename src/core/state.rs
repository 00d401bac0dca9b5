//! Phase trait shared by every lifecycle state of a wizard step.
//!
//! Phases are plain values. Inspecting them never has side effects, so the
//! history and the step engine can reason about them freely.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the lifecycle phases of a wizard step.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into the history
/// - `PartialEq`: the step engine compares phases
/// - `Debug`: phases show up in diagnostics
/// - `Serialize` + `Deserialize`: histories can be exported as JSON
///
/// # Example
///
/// ```rust
/// use checkout_step::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Loading,
///     Editing,
///     Submitted,
/// }
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Loading => "Loading",
///             Self::Editing => "Editing",
///             Self::Submitted => "Submitted",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Submitted)
///     }
/// }
///
/// assert!(Screen::Submitted.is_final());
/// assert!(!Screen::Editing.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Display name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether control has left the step for good.
    ///
    /// Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the phase reports a failed attempt.
    ///
    /// Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}
