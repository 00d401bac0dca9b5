//! Typed payloads passed between wizard steps.
//!
//! Steps never share state. Each receives its context by value and produces
//! the next one as a return value.

mod inbound;
mod outbound;

pub use inbound::{Identifier, InboundCarrier, InboundContext, PaymentMethod};
pub use outbound::{OutboundContext, PaymentFields};
