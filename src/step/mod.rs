//! The payment step itself: entry guard, submit boundary, submission state
//! machine and the navigation seam.
//!
//! Pure pieces ([`StepGuard`], [`PaymentForm::resolve`],
//! [`crate::validation::validate_fields`]) decide; [`PaymentStep`] applies
//! their decisions to its own state and issues [`Route`]s to a
//! [`Navigator`].

mod error;
mod form;
mod guard;
mod machine;
mod navigator;
mod phase;
mod view;

pub use error::StepError;
pub use form::PaymentForm;
pub use guard::{decode_carrier, Activation, ContextViolation, StepGuard};
pub use machine::{PaymentStep, SubmitOutcome};
pub use navigator::{Navigator, Route};
pub use phase::StepPhase;
pub use view::{FormView, MethodOption, StepView};
