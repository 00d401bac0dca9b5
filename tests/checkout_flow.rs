//! End-to-end scenarios for the payment step: activation, rejection,
//! correction and hand-off to the next step.

use checkout_step::step::{
    Activation, PaymentForm, PaymentStep, Route, StepError, StepPhase, StepView, SubmitOutcome,
};
use checkout_step::{FieldErrors, StepConfig};
use serde_json::{json, Value};

fn inbound() -> Value {
    json!({
        "signature": "sig1",
        "paymentMethods": [{"method": "credit_card"}],
        "selectedLoanNumber": 42,
        "course": "C1"
    })
}

fn submission(cvv: &str) -> Value {
    json!({
        "method": "credit_card",
        "cardNumber": "4111111111111111",
        "cardName": "Jane Doe",
        "expirationDate": "09/27",
        "cvv": cvv
    })
}

fn ready_step() -> PaymentStep<Vec<Route>> {
    let mut step = PaymentStep::new(StepConfig::default(), Vec::<Route>::new());
    assert_eq!(step.activate(Some(&inbound())), Activation::Ready);
    step
}

fn next_step_state(routes: &[Route]) -> Value {
    match routes {
        [Route::NextStep { path, state }] => {
            assert_eq!(path, "/step4");
            serde_json::to_value(state).unwrap()
        }
        other => panic!("Expected a single hand-off to the next step, got {other:?}"),
    }
}

#[test]
fn valid_submission_forwards_the_full_context() {
    let mut step = ready_step();

    let outcome = step.submit_event(&submission("123")).unwrap();

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        next_step_state(step.navigator()),
        json!({
            "signature": "sig1",
            "paymentMethods": [{"method": "credit_card"}],
            "selectedLoanNumber": 42,
            "course": "C1",
            "payment": {
                "method": "credit_card",
                "cardNumber": "4111111111111111",
                "cardName": "Jane Doe",
                "expirationDate": "09/27",
                "cvv": "123"
            }
        })
    );
}

#[test]
fn short_cvv_keeps_the_user_on_the_step() {
    let mut step = ready_step();

    let outcome = step.submit_event(&submission("12")).unwrap();

    let expected = FieldErrors {
        cvv: true,
        ..FieldErrors::default()
    };
    assert_eq!(outcome, SubmitOutcome::Rejected(expected));
    assert!(step.navigator().is_empty());

    match step.view() {
        StepView::Form(view) => {
            assert_eq!(view.errors, expected);
            let values = view.values.expect("rejected values are retained");
            assert_eq!(values.card_number, "4111111111111111");
            assert_eq!(values.card_name, "Jane Doe");
            assert_eq!(values.cvv, "12");
        }
        StepView::Waiting { .. } => panic!("Expected the form to stay visible"),
    }
}

#[test]
fn corrected_submission_is_accepted() {
    let mut step = ready_step();

    step.submit_event(&submission("12")).unwrap();
    let outcome = step.submit_event(&submission("123")).unwrap();

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(step.field_errors().is_clear());
    assert_eq!(
        next_step_state(step.navigator())["payment"]["cvv"],
        json!("123")
    );
}

#[test]
fn card_number_and_cvv_failures_are_isolated() {
    let mut step = ready_step();

    let outcome = step
        .submit_event(&json!({
            "method": "credit_card",
            "cardNumber": "4111",
            "cardName": "Jane Doe",
            "expirationDate": "09/27",
            "cvv": "1"
        }))
        .unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(FieldErrors {
            card_number: true,
            card_name: false,
            expiration_date: false,
            cvv: true,
        })
    );
    assert!(step.navigator().is_empty());
}

#[test]
fn identical_submissions_produce_identical_bundles() {
    let mut first = ready_step();
    let mut second = ready_step();

    first.submit_event(&submission("123")).unwrap();
    second.submit_event(&submission("123")).unwrap();

    assert_eq!(first.navigator(), second.navigator());
    assert_eq!(
        next_step_state(first.navigator()),
        next_step_state(second.navigator())
    );
}

#[test]
fn missing_context_sends_the_user_home() {
    let incomplete = [
        None,
        Some(json!(null)),
        Some(json!({"signature": "sig1", "paymentMethods": [], "selectedLoanNumber": 42, "course": "C1"})),
        Some(json!({"paymentMethods": [{"method": "pix"}], "selectedLoanNumber": 42, "course": "C1"})),
        Some(json!({"signature": "sig1", "paymentMethods": [{"method": "pix"}], "course": "C1"})),
        Some(json!({"signature": "sig1", "paymentMethods": [{"method": "pix"}], "selectedLoanNumber": 42})),
        Some(json!({"signature": "sig1", "paymentMethods": [{"method": "pix"}], "selectedLoanNumber": "", "course": "C1"})),
    ];

    for carrier in incomplete {
        let mut step = PaymentStep::new(StepConfig::default(), Vec::<Route>::new());

        let activation = step.activate(carrier.as_ref());

        assert_eq!(
            activation,
            Activation::Redirect {
                target: "/".into()
            }
        );
        assert_eq!(step.navigator().as_slice(), [Route::Home { path: "/".into() }]);
        assert!(matches!(step.view(), StepView::Waiting { .. }));
        assert_eq!(step.phase(), StepPhase::Redirected);
    }
}

#[test]
fn ready_form_preselects_the_first_method() {
    let mut step = PaymentStep::new(StepConfig::default(), Vec::<Route>::new());
    step.activate(Some(&json!({
        "signature": "sig1",
        "paymentMethods": [{"method": "credit_card"}, {"method": "debit_card"}],
        "selectedLoanNumber": "L-42",
        "course": 7
    })));

    match step.view() {
        StepView::Form(view) => {
            assert_eq!(view.texts.title, "Método de pagamento");
            assert!(!view.disabled);
            assert!(view.errors.is_clear());
            assert!(view.values.is_none());
            let labels: Vec<&str> = view.methods.iter().map(|m| m.label.as_str()).collect();
            assert_eq!(labels, ["CREDIT", "DEBIT"]);
            assert_eq!(
                view.selected_method().map(|m| m.value.as_str()),
                Some("credit_card")
            );
        }
        StepView::Waiting { .. } => panic!("Expected the form"),
    }
}

#[test]
fn unchosen_method_defaults_to_the_first_offered() {
    let mut step = ready_step();

    step.submit(PaymentForm {
        method: None,
        card_number: "4111 1111 1111 1111".into(),
        card_name: "Jane Doe".into(),
        expiration_date: "12/30".into(),
        cvv: "999".into(),
    })
    .unwrap();

    assert_eq!(
        next_step_state(step.navigator())["payment"]["method"],
        json!("credit_card")
    );
}

#[test]
fn malformed_submission_is_dropped_quietly() {
    let mut step = ready_step();

    let missing_field = step.submit_event(&json!({"cardNumber": "4111111111111111"}));
    let unknown_method = step.submit_event(&json!({
        "method": "crypto",
        "cardNumber": "4111111111111111",
        "cardName": "Jane Doe",
        "expirationDate": "09/27",
        "cvv": "123"
    }));

    assert!(matches!(missing_field, Err(StepError::MalformedSubmission(_))));
    assert!(matches!(unknown_method, Err(StepError::MalformedSubmission(_))));
    assert!(step.field_errors().is_clear());
    assert!(step.navigator().is_empty());
    assert!(!step.is_busy());
    assert_eq!(step.phase(), StepPhase::Idle);
}

#[test]
fn cancelling_a_filled_form_sends_the_user_home_empty_handed() {
    let config = StepConfig::from_json(r#"{"paths": {"home": "/start"}}"#).unwrap();
    let mut step = PaymentStep::new(config, Vec::<Route>::new());
    step.activate(Some(&inbound()));
    step.submit_event(&submission("12")).unwrap();

    step.cancel().unwrap();

    assert_eq!(
        step.navigator().as_slice(),
        [Route::Home {
            path: "/start".into()
        }]
    );
    assert_eq!(step.phase(), StepPhase::Cancelled);
    assert!(step.submit_event(&submission("123")).is_err());
    assert_eq!(step.navigator().len(), 1);
}

#[test]
fn custom_paths_are_used_for_both_exits() {
    let config = StepConfig::from_json(r#"{"paths": {"home": "/start", "nextStep": "/confirm"}}"#)
        .unwrap();

    let mut lost = PaymentStep::new(config.clone(), Vec::<Route>::new());
    lost.activate(None);
    assert_eq!(lost.navigator()[0].path(), "/start");

    let mut found = PaymentStep::new(config, Vec::<Route>::new());
    found.activate(Some(&inbound()));
    found.submit_event(&submission("321")).unwrap();
    assert_eq!(found.navigator()[0].path(), "/confirm");
}
