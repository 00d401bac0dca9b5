//! Context handed down by the previous wizard steps.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;
use stillwater::NonEmptyVec;

/// Loan number or course id. Upstream steps send either a string or any
/// JSON number; both are kept exactly as received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(Number),
    Text(String),
}

impl Identifier {
    /// `false` for the empty string and for zero (`0`, `-0`, `0.0`).
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() != Some(0.0),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for Identifier {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One payment option offered by the upstream steps.
///
/// Only `method` is interpreted here. Any other keys travel with the entry
/// untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub method: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentMethod {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            extra: Map::new(),
        }
    }

    /// Short label for the method picker: `credit_card` becomes `CREDIT`.
    pub fn label(&self) -> String {
        self.method
            .split('_')
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }
}

/// Raw shape of the navigation state as it arrives. Every field may be
/// missing; `StepGuard` decides whether the result is usable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundCarrier {
    pub signature: Option<String>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub selected_loan_number: Option<Identifier>,
    pub course: Option<Identifier>,
}

fn serialize_methods<S>(
    methods: &NonEmptyVec<PaymentMethod>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(methods.iter())
}

/// Inbound context that passed the step guard.
///
/// Only the guard builds these, so no field is ever blank.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundContext {
    signature: String,
    #[serde(serialize_with = "serialize_methods")]
    payment_methods: NonEmptyVec<PaymentMethod>,
    selected_loan_number: Identifier,
    course: Identifier,
}

impl InboundContext {
    pub(crate) fn new(
        signature: String,
        payment_methods: NonEmptyVec<PaymentMethod>,
        selected_loan_number: Identifier,
        course: Identifier,
    ) -> Self {
        Self {
            signature,
            payment_methods,
            selected_loan_number,
            course,
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn payment_methods(&self) -> &NonEmptyVec<PaymentMethod> {
        &self.payment_methods
    }

    pub fn selected_loan_number(&self) -> &Identifier {
        &self.selected_loan_number
    }

    pub fn course(&self) -> &Identifier {
        &self.course
    }

    /// Method pre-selected in the form: the first one offered.
    pub fn default_method(&self) -> &PaymentMethod {
        self.payment_methods.head()
    }

    /// Look up an offered method by identifier.
    pub fn find_method(&self, method: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.method == method)
    }
}
