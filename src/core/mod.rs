//! Pure building blocks shared by the step engine.
//!
//! - `State` describes lifecycle phases
//! - `PhaseHistory` keeps an immutable trail of phase changes

mod history;
mod state;

pub use history::{PhaseChange, PhaseHistory};
pub use state::State;
