//! Validation of the user-entered payment fields.
//!
//! The predicates in `fields` classify one raw string each. `validate_fields`
//! runs all of them through Stillwater's `Validation`, so a single submit
//! reports every invalid field instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use checkout_step::context::PaymentFields;
//! use checkout_step::validation::{validate_fields, FieldErrors};
//! use stillwater::validation::Validation;
//!
//! let fields = PaymentFields {
//!     method: "credit_card".into(),
//!     card_number: "4111 1111 1111 1111".into(),
//!     card_name: "Jane Doe".into(),
//!     expiration_date: "09/27".into(),
//!     cvv: "12".into(),
//! };
//!
//! match validate_fields(&fields, None) {
//!     Validation::Failure(violations) => {
//!         let errors = FieldErrors::from_violations(violations.iter());
//!         assert!(errors.cvv);
//!         assert!(!errors.card_number);
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod fields;
pub mod rules;
pub mod violations;

pub use fields::{
    is_unexpired, is_valid_card_expiration_date, is_valid_card_number, is_valid_cvv,
    is_valid_name,
};
pub use rules::{validate_fields, FieldValidation};
pub use violations::{FieldErrors, FieldViolation, PaymentField};
