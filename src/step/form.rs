//! Submit boundary: turns a raw form payload into typed payment fields.

use crate::context::{InboundContext, PaymentFields};
use crate::step::error::StepError;
use serde::Deserialize;
use serde_json::Value;

/// Named fields posted by the payment form.
///
/// `method` may be left out, in which case the first offered method is
/// used. The four card fields are required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    #[serde(default)]
    pub method: Option<String>,
    pub card_number: String,
    pub card_name: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl PaymentForm {
    /// Decode a submit event. Missing fields or non-string values make the
    /// event malformed.
    ///
    /// ```rust
    /// use checkout_step::step::{PaymentForm, StepError};
    /// use serde_json::json;
    ///
    /// let form = PaymentForm::from_event(&json!({
    ///     "cardNumber": "4111111111111111",
    ///     "cardName": "Jane Doe",
    ///     "expirationDate": "09/27",
    ///     "cvv": "123"
    /// }))
    /// .unwrap();
    /// assert!(form.method.is_none());
    ///
    /// let err = PaymentForm::from_event(&json!({"cardNumber": "4111"})).unwrap_err();
    /// assert!(matches!(err, StepError::MalformedSubmission(_)));
    /// ```
    pub fn from_event(event: &Value) -> Result<Self, StepError> {
        serde_json::from_value(event.clone())
            .map_err(|e| StepError::MalformedSubmission(e.to_string()))
    }

    /// Resolve the chosen method against the offered ones.
    ///
    /// An empty or missing choice falls back to the default method. A
    /// choice that was never offered cannot come from the rendered form
    /// and is reported as malformed.
    pub fn resolve(self, context: &InboundContext) -> Result<PaymentFields, StepError> {
        let method = match self.method.filter(|m| !m.is_empty()) {
            None => context.default_method().method.clone(),
            Some(chosen) if context.find_method(&chosen).is_some() => chosen,
            Some(chosen) => {
                return Err(StepError::MalformedSubmission(format!(
                    "payment method '{chosen}' was not offered"
                )));
            }
        };

        Ok(PaymentFields {
            method,
            card_number: self.card_number,
            card_name: self.card_name,
            expiration_date: self.expiration_date,
            cvv: self.cvv,
        })
    }
}
