//! What the host should render for the current phase.

use crate::config::StepTexts;
use crate::context::{InboundContext, PaymentFields};
use crate::validation::FieldErrors;

/// Rendering instruction for the payment step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepView {
    /// Guard not passed (yet): show the placeholder, never the form
    Waiting { texts: StepTexts },
    Form(FormView),
}

/// One entry of the method picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormView {
    pub texts: StepTexts,
    pub methods: Vec<MethodOption>,
    pub errors: FieldErrors,
    /// Inputs are disabled while a submission is in flight
    pub disabled: bool,
    /// Values of the last rejected submission, kept for correction
    pub values: Option<PaymentFields>,
}

impl FormView {
    pub(crate) fn build(
        context: &InboundContext,
        texts: &StepTexts,
        errors: FieldErrors,
        disabled: bool,
        values: Option<&PaymentFields>,
    ) -> Self {
        let selected = values
            .map(|v| v.method.as_str())
            .unwrap_or(context.default_method().method.as_str());

        let methods = context
            .payment_methods()
            .iter()
            .map(|m| MethodOption {
                value: m.method.clone(),
                label: m.label(),
                selected: m.method == selected,
            })
            .collect();

        Self {
            texts: texts.clone(),
            methods,
            errors,
            disabled,
            values: values.cloned(),
        }
    }

    pub fn selected_method(&self) -> Option<&MethodOption> {
        self.methods.iter().find(|m| m.selected)
    }
}
