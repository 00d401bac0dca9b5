//! Field identifiers, violations and the per-field error flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validated fields of the payment form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentField {
    CardNumber,
    CardName,
    ExpirationDate,
    Cvv,
}

impl PaymentField {
    pub const ALL: [PaymentField; 4] = [
        Self::CardNumber,
        Self::CardName,
        Self::ExpirationDate,
        Self::Cvv,
    ];

    /// Form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::CardName => "cardName",
            Self::ExpirationDate => "expirationDate",
            Self::Cvv => "cvv",
        }
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected. Messages never echo the entered value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("Card number must be 16 digits, optionally grouped in fours")]
    CardNumber,

    #[error("Card holder name must contain only letters and spaces")]
    CardName,

    #[error("Expiration date must be MM/YY with a month between 01 and 12")]
    ExpirationDate,

    #[error("Card expired (valid through {expiration})")]
    Expired { expiration: String },

    #[error("CVV must be exactly 3 digits")]
    Cvv,
}

impl FieldViolation {
    pub fn field(&self) -> PaymentField {
        match self {
            Self::CardNumber => PaymentField::CardNumber,
            Self::CardName => PaymentField::CardName,
            Self::ExpirationDate | Self::Expired { .. } => PaymentField::ExpirationDate,
            Self::Cvv => PaymentField::Cvv,
        }
    }
}

/// "Is invalid" flag per field, rendered as an inline marker next to the
/// offending input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub card_number: bool,
    pub card_name: bool,
    pub expiration_date: bool,
    pub cvv: bool,
}

impl FieldErrors {
    /// Flags set for exactly the fields named by `violations`.
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a FieldViolation>,
    {
        violations
            .into_iter()
            .fold(Self::default(), |mut errors, violation| {
                errors.mark(violation.field());
                errors
            })
    }

    pub fn mark(&mut self, field: PaymentField) {
        *self.slot(field) = true;
    }

    pub fn is_invalid(&self, field: PaymentField) -> bool {
        match field {
            PaymentField::CardNumber => self.card_number,
            PaymentField::CardName => self.card_name,
            PaymentField::ExpirationDate => self.expiration_date,
            PaymentField::Cvv => self.cvv,
        }
    }

    /// No field flagged.
    pub fn is_clear(&self) -> bool {
        PaymentField::ALL.iter().all(|f| !self.is_invalid(*f))
    }

    /// Flagged fields in form order.
    pub fn invalid_fields(&self) -> Vec<PaymentField> {
        PaymentField::ALL
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .collect()
    }

    fn slot(&mut self, field: PaymentField) -> &mut bool {
        match field {
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::CardName => &mut self.card_name,
            PaymentField::ExpirationDate => &mut self.expiration_date,
            PaymentField::Cvv => &mut self.cvv,
        }
    }
}
