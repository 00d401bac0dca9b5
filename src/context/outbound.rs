//! Context handed to the next wizard step.

use super::inbound::InboundContext;
use serde::{Deserialize, Serialize};

/// Payment values exactly as the user entered them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFields {
    pub method: String,
    pub card_number: String,
    pub card_name: String,
    pub expiration_date: String,
    pub cvv: String,
}

/// Inbound context plus the collected payment.
///
/// Serializes flat: the inbound keys sit next to `payment`, so the next
/// step reads the same shape it would have received from earlier steps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutboundContext {
    #[serde(flatten)]
    context: InboundContext,
    payment: PaymentFields,
}

impl OutboundContext {
    /// Carry `context` forward unchanged and attach `payment`.
    pub fn compose(context: &InboundContext, payment: PaymentFields) -> Self {
        Self {
            context: context.clone(),
            payment,
        }
    }

    pub fn context(&self) -> &InboundContext {
        &self.context
    }

    pub fn payment(&self) -> &PaymentFields {
        &self.payment
    }
}
