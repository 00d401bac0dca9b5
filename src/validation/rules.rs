//! Whole-form validation that reports every failing field at once.

use crate::context::PaymentFields;
use crate::validation::fields::{
    is_unexpired, is_valid_card_expiration_date, is_valid_card_number, is_valid_cvv,
    is_valid_name,
};
use crate::validation::violations::FieldViolation;
use chrono::NaiveDate;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a payment form.
pub type FieldValidation = Validation<(), NonEmptyVec<FieldViolation>>;

fn require(passed: bool, violation: FieldViolation) -> FieldValidation {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn check_expiration(raw: &str, as_of: Option<NaiveDate>) -> FieldValidation {
    if !is_valid_card_expiration_date(raw) {
        return Validation::fail(FieldViolation::ExpirationDate);
    }
    match as_of {
        Some(today) if !is_unexpired(raw, today) => Validation::fail(FieldViolation::Expired {
            expiration: raw.to_string(),
        }),
        _ => Validation::success(()),
    }
}

/// Run every field predicate and accumulate all failures.
///
/// `as_of` enables the expiry check against that date. With `None` the
/// result depends only on `fields`.
pub fn validate_fields(fields: &PaymentFields, as_of: Option<NaiveDate>) -> FieldValidation {
    let checks = vec![
        require(
            is_valid_card_number(&fields.card_number),
            FieldViolation::CardNumber,
        ),
        require(is_valid_name(&fields.card_name), FieldViolation::CardName),
        check_expiration(&fields.expiration_date, as_of),
        require(is_valid_cvv(&fields.cvv), FieldViolation::Cvv),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PaymentFields {
        PaymentFields {
            method: "credit_card".into(),
            card_number: "4111 1111 1111 1111".into(),
            card_name: "Jane Doe".into(),
            expiration_date: "09/27".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate_fields(&valid(), None).is_success());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let fields = PaymentFields {
            card_number: "123".into(),
            card_name: "".into(),
            expiration_date: "13/27".into(),
            cvv: "12".into(),
            ..valid()
        };

        match validate_fields(&fields, None) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 4);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FieldViolation::ExpirationDate)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn partial_failure_names_only_the_bad_fields() {
        let fields = PaymentFields {
            card_number: "4111".into(),
            cvv: "1".into(),
            ..valid()
        };

        match validate_fields(&fields, None) {
            Validation::Failure(violations) => {
                let named: Vec<_> = violations.iter().map(|v| v.field()).collect();
                assert_eq!(named.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FieldViolation::CardNumber)));
                assert!(violations.iter().any(|v| matches!(v, FieldViolation::Cvv)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn expiry_check_only_applies_with_a_date() {
        let fields = PaymentFields {
            expiration_date: "01/20".into(),
            ..valid()
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        assert!(validate_fields(&fields, None).is_success());

        match validate_fields(&fields, Some(today)) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FieldViolation::Expired { .. })));
            }
            Validation::Success(_) => panic!("Expected an expired card"),
        }
    }

    #[test]
    fn malformed_expiry_is_not_also_reported_as_expired() {
        let fields = PaymentFields {
            expiration_date: "9/27".into(),
            ..valid()
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        match validate_fields(&fields, Some(today)) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations
                    .iter()
                    .all(|v| matches!(v, FieldViolation::ExpirationDate)));
            }
            Validation::Success(_) => panic!("Expected a format failure"),
        }
    }
}
