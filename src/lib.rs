//! checkout-step: the payment step of a multi-step checkout wizard.
//!
//! The crate is the step's guard, validate and forward engine. It has no
//! I/O of its own: a host feeds it the navigation state handed down by
//! earlier steps and the submitted form, and receives rendering
//! instructions and navigation requests back.
//!
//! # Modules
//!
//! - [`core`]: phase trait and phase history
//! - [`context`]: typed payloads passed between steps
//! - [`validation`]: per-field predicates and whole-form validation
//! - [`step`]: entry guard, submit boundary and the [`PaymentStep`] itself
//! - [`config`]: navigation targets and display texts
//!
//! # Example
//!
//! ```rust
//! use checkout_step::{PaymentForm, PaymentStep, Route, StepConfig, SubmitOutcome};
//! use serde_json::json;
//!
//! let mut step = PaymentStep::new(StepConfig::default(), Vec::<Route>::new());
//! step.activate(Some(&json!({
//!     "signature": "sig1",
//!     "paymentMethods": [{"method": "credit_card"}],
//!     "selectedLoanNumber": 42,
//!     "course": "C1"
//! })));
//!
//! let outcome = step
//!     .submit(PaymentForm {
//!         method: Some("credit_card".into()),
//!         card_number: "4111111111111111".into(),
//!         card_name: "Jane Doe".into(),
//!         expiration_date: "09/27".into(),
//!         cvv: "12".into(),
//!     })
//!     .unwrap();
//!
//! match outcome {
//!     SubmitOutcome::Rejected(errors) => assert!(errors.cvv && !errors.card_name),
//!     SubmitOutcome::Accepted => unreachable!(),
//! }
//! assert!(step.navigator().iter().all(|r| !matches!(r, Route::NextStep { .. })));
//! ```

pub mod config;
pub mod context;
pub mod core;
pub mod step;
pub mod validation;

// Re-export commonly used types
pub use config::StepConfig;
pub use context::{InboundContext, OutboundContext, PaymentFields};
pub use step::{Activation, PaymentForm, PaymentStep, Route, StepError, SubmitOutcome};
pub use validation::FieldErrors;
