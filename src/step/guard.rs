//! Entry guard: decides whether the payment step may be entered.

use crate::context::{Identifier, InboundCarrier, InboundContext};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Precondition that an inbound context failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextViolation {
    #[error("No inbound context was provided")]
    Absent,

    #[error("Signature is missing")]
    MissingSignature,

    #[error("No payment methods were offered")]
    MissingPaymentMethods,

    #[error("Selected loan number is missing")]
    MissingLoanNumber,

    #[error("Course is missing")]
    MissingCourse,
}

/// Outcome of activating the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Form may be shown
    Ready,
    /// Step was left for `target`
    Redirect { target: String },
}

type GuardValidation<T> = Validation<T, NonEmptyVec<ContextViolation>>;

fn require(passed: bool, violation: ContextViolation) -> GuardValidation<()> {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn present(id: &Option<Identifier>) -> bool {
    id.as_ref().is_some_and(Identifier::is_present)
}

/// Read the navigation-state carrier. Anything that does not decode is
/// treated like no context at all.
pub fn decode_carrier(raw: &Value) -> Option<InboundCarrier> {
    match serde_json::from_value(raw.clone()) {
        Ok(carrier) => Some(carrier),
        Err(err) => {
            tracing::debug!(error = %err, "inbound navigation state has an unexpected shape");
            None
        }
    }
}

/// Pure precondition check run on step entry.
pub struct StepGuard;

impl StepGuard {
    /// Turn a carrier into a usable context, collecting every missing
    /// precondition.
    ///
    /// ```rust
    /// use checkout_step::context::InboundCarrier;
    /// use checkout_step::step::StepGuard;
    /// use stillwater::validation::Validation;
    ///
    /// let carrier = InboundCarrier {
    ///     signature: Some("sig1".into()),
    ///     payment_methods: Some(vec![]),
    ///     selected_loan_number: Some(42.into()),
    ///     course: None,
    /// };
    ///
    /// match StepGuard::evaluate(Some(carrier)) {
    ///     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn evaluate(carrier: Option<InboundCarrier>) -> GuardValidation<InboundContext> {
        let Some(carrier) = carrier else {
            return Validation::fail(ContextViolation::Absent);
        };

        let checks = vec![
            require(
                carrier.signature.as_deref().is_some_and(|s| !s.is_empty()),
                ContextViolation::MissingSignature,
            ),
            require(
                carrier
                    .payment_methods
                    .as_ref()
                    .is_some_and(|m| !m.is_empty()),
                ContextViolation::MissingPaymentMethods,
            ),
            require(
                present(&carrier.selected_loan_number),
                ContextViolation::MissingLoanNumber,
            ),
            require(present(&carrier.course), ContextViolation::MissingCourse),
        ];

        if let Validation::Failure(violations) = Validation::all_vec(checks) {
            return Validation::Failure(violations);
        }

        match carrier {
            InboundCarrier {
                signature: Some(signature),
                payment_methods: Some(methods),
                selected_loan_number: Some(loan),
                course: Some(course),
            } => match NonEmptyVec::from_vec(methods) {
                Some(methods) => {
                    Validation::success(InboundContext::new(signature, methods, loan, course))
                }
                None => Validation::fail(ContextViolation::MissingPaymentMethods),
            },
            _ => Validation::fail(ContextViolation::Absent),
        }
    }

    /// Like [`StepGuard::evaluate`] but only answers yes or no.
    pub fn admits(carrier: Option<InboundCarrier>) -> bool {
        Self::evaluate(carrier).is_success()
    }
}
