//! The payment step: one-shot entry guard plus the submission state machine.

use crate::config::{StepConfig, StepTexts};
use crate::context::{InboundCarrier, InboundContext, OutboundContext, PaymentFields};
use crate::core::{PhaseChange, PhaseHistory, State};
use crate::step::error::StepError;
use crate::step::form::PaymentForm;
use crate::step::guard::{decode_carrier, Activation, StepGuard};
use crate::step::navigator::{Navigator, Route};
use crate::step::phase::StepPhase;
use crate::step::view::{FormView, StepView};
use crate::validation::{validate_fields, FieldErrors};
use chrono::Utc;
use serde_json::Value;
use stillwater::validation::Validation;
use tracing::{debug, error, info, warn};

/// Result of a submission that reached validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Outbound context handed to the navigator
    Accepted,
    /// Step stays; the flags mark the fields to correct
    Rejected(FieldErrors),
}

/// Payment step of the checkout wizard.
///
/// Driven by [`activate`](Self::activate) once on entry,
/// [`submit`](Self::submit) for every form submission and
/// [`cancel`](Self::cancel) when the user walks away. All calls run to
/// completion on the caller's thread.
///
/// # Example
///
/// ```rust
/// use checkout_step::config::StepConfig;
/// use checkout_step::step::{Activation, PaymentForm, PaymentStep, Route, SubmitOutcome};
/// use serde_json::json;
///
/// let mut routes: Vec<Route> = Vec::new();
/// let mut step = PaymentStep::new(StepConfig::default(), &mut routes);
///
/// let inbound = json!({
///     "signature": "sig1",
///     "paymentMethods": [{"method": "credit_card"}],
///     "selectedLoanNumber": 42,
///     "course": "C1"
/// });
/// assert_eq!(step.activate(Some(&inbound)), Activation::Ready);
///
/// let outcome = step
///     .submit(PaymentForm {
///         method: None,
///         card_number: "4111 1111 1111 1111".into(),
///         card_name: "Jane Doe".into(),
///         expiration_date: "09/27".into(),
///         cvv: "123".into(),
///     })
///     .unwrap();
/// assert_eq!(outcome, SubmitOutcome::Accepted);
///
/// drop(step);
/// assert_eq!(routes[0].path(), "/step4");
/// ```
pub struct PaymentStep<N: Navigator> {
    config: StepConfig,
    navigator: N,
    phase: StepPhase,
    activation: Option<Activation>,
    context: Option<InboundContext>,
    texts: StepTexts,
    errors: FieldErrors,
    busy: bool,
    retained: Option<PaymentFields>,
    attempt: usize,
    history: PhaseHistory<StepPhase>,
}

impl<N: Navigator> PaymentStep<N> {
    pub fn new(config: StepConfig, navigator: N) -> Self {
        let texts = config.texts.clone();
        Self {
            config,
            navigator,
            phase: StepPhase::Waiting,
            activation: None,
            context: None,
            texts,
            errors: FieldErrors::default(),
            // input stays disabled until the guard lets the step in
            busy: true,
            retained: None,
            attempt: 0,
            history: PhaseHistory::new(),
        }
    }

    /// Run the entry guard against the navigation-state carrier.
    ///
    /// The guard runs once per step. Later calls return the first outcome
    /// and do not navigate again.
    pub fn activate(&mut self, carrier: Option<&Value>) -> Activation {
        if let Some(done) = &self.activation {
            debug!("payment step already activated");
            return done.clone();
        }
        let carrier = carrier.and_then(decode_carrier);
        self.run_guard(carrier)
    }

    /// [`activate`](Self::activate) for hosts that already hold a typed
    /// carrier.
    pub fn activate_with(&mut self, carrier: Option<InboundCarrier>) -> Activation {
        if let Some(done) = &self.activation {
            debug!("payment step already activated");
            return done.clone();
        }
        self.run_guard(carrier)
    }

    fn run_guard(&mut self, carrier: Option<InboundCarrier>) -> Activation {
        let activation = match StepGuard::evaluate(carrier) {
            Validation::Success(context) => {
                self.context = Some(context);
                self.texts.title = self.config.ready_title.clone();
                self.busy = false;
                self.enter(StepPhase::Idle);
                Activation::Ready
            }
            Validation::Failure(violations) => {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                debug!(?reasons, "inbound context unusable, leaving payment step");
                self.enter(StepPhase::Redirected);
                let target = self.config.paths.home.clone();
                self.navigator.navigate(Route::Home {
                    path: target.clone(),
                });
                Activation::Redirect { target }
            }
        };
        self.activation = Some(activation.clone());
        activation
    }

    /// Decode a raw submit event, then [`submit`](Self::submit) it.
    ///
    /// A payload that does not decode is logged and dropped: no navigation
    /// and the field flags stay as they were.
    pub fn submit_event(&mut self, event: &Value) -> Result<SubmitOutcome, StepError> {
        if !self.accepts_submissions() {
            return Err(self.refusal());
        }
        match PaymentForm::from_event(event) {
            Ok(form) => self.submit(form),
            Err(err) => Err(self.abort(err)),
        }
    }

    /// Validate a submission and either hand the outbound context to the
    /// next step or flag the invalid fields.
    pub fn submit(&mut self, form: PaymentForm) -> Result<SubmitOutcome, StepError> {
        if !self.accepts_submissions() {
            return Err(self.refusal());
        }
        let resolved = match self.context.as_ref() {
            Some(context) => form.resolve(context),
            None => return Err(self.refusal()),
        };
        let fields = match resolved {
            Ok(fields) => fields,
            Err(err) => return Err(self.abort(err)),
        };

        self.attempt += 1;
        self.errors = FieldErrors::default();
        self.busy = true;
        self.enter(StepPhase::Validating);

        let as_of = self
            .config
            .reject_expired_cards
            .then(|| Utc::now().date_naive());

        match validate_fields(&fields, as_of) {
            Validation::Success(_) => {
                let outbound = match self.context.as_ref() {
                    Some(context) => OutboundContext::compose(context, fields),
                    None => return Err(self.refusal()),
                };
                self.retained = None;
                self.enter(StepPhase::Accepted);
                info!(
                    attempt = self.attempt,
                    rejections = self.history.failures(),
                    elapsed = ?self.history.elapsed(),
                    method = %outbound.payment().method,
                    "payment step accepted, moving to next step"
                );
                self.navigator.navigate(Route::NextStep {
                    path: self.config.paths.next_step.clone(),
                    state: outbound,
                });
                Ok(SubmitOutcome::Accepted)
            }
            Validation::Failure(violations) => {
                self.errors = FieldErrors::from_violations(violations.iter());
                let invalid: Vec<&str> = self
                    .errors
                    .invalid_fields()
                    .into_iter()
                    .map(|f| f.as_str())
                    .collect();
                debug!(attempt = self.attempt, ?invalid, "payment fields rejected");
                self.retained = Some(fields);
                self.enter(StepPhase::Rejected);
                self.enter(StepPhase::Idle);
                self.busy = false;
                Ok(SubmitOutcome::Rejected(self.errors))
            }
        }
    }

    /// Leave the step for home without submitting.
    ///
    /// Only possible while the form is on screen. The home route carries
    /// nothing, and whatever was typed into the form is dropped.
    pub fn cancel(&mut self) -> Result<(), StepError> {
        if self.context.is_none() || self.phase.is_final() {
            warn!(phase = self.phase.name(), "cancel refused");
            return Err(StepError::NotCancellable {
                phase: self.phase.name().to_string(),
            });
        }
        self.errors = FieldErrors::default();
        self.retained = None;
        self.busy = true;
        self.enter(StepPhase::Cancelled);
        info!(
            attempts = self.attempt,
            rejections = self.history.failures(),
            elapsed = ?self.history.elapsed(),
            "payment step cancelled, going home"
        );
        self.navigator.navigate(Route::Home {
            path: self.config.paths.home.clone(),
        });
        Ok(())
    }

    /// What the host should render right now. Once control has left the
    /// step only the placeholder is shown.
    pub fn view(&self) -> StepView {
        match &self.context {
            Some(context) if !self.phase.is_final() => StepView::Form(FormView::build(
                context,
                &self.texts,
                self.errors,
                self.busy,
                self.retained.as_ref(),
            )),
            _ => StepView::Waiting {
                texts: self.texts.clone(),
            },
        }
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Whether form inputs are disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn context(&self) -> Option<&InboundContext> {
        self.context.as_ref()
    }

    pub fn texts(&self) -> &StepTexts {
        &self.texts
    }

    pub fn history(&self) -> &PhaseHistory<StepPhase> {
        &self.history
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    fn accepts_submissions(&self) -> bool {
        self.phase == StepPhase::Idle
    }

    fn refusal(&self) -> StepError {
        warn!(phase = self.phase.name(), "submission refused");
        StepError::NotAccepting {
            phase: self.phase.name().to_string(),
        }
    }

    fn abort(&mut self, err: StepError) -> StepError {
        error!(error = %err, "payment form submission aborted");
        self.busy = false;
        err
    }

    fn enter(&mut self, to: StepPhase) {
        debug!(from = self.phase.name(), to = to.name(), "payment step phase change");
        self.history = self.history.record(PhaseChange {
            from: self.phase,
            to,
            at: Utc::now(),
            attempt: self.attempt,
        });
        self.phase = to;
    }
}
