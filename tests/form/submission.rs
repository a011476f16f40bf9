use crate::helpers::{STATUS_RESET_DELAY, spawn_form};
use claims::{assert_err, assert_matches, assert_ok};
use dreamcity_contact::SubmitError;
use dreamcity_contact::domain::{Field, FormInput, Language, ReasonCode, SubmissionStatus};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_submission_is_delivered_and_clears_the_form() {
    // Arrange
    let app = spawn_form(Language::En).await;
    app.provider_answers(200).await;
    app.fill_valid();

    // Act
    let outcome = app.form.submit().await;

    // Assert
    assert_ok!(outcome);
    assert_eq!(app.form.status(), SubmissionStatus::Success);
    assert_eq!(app.form.input(), FormInput::default());
    assert!(!app.form.field_errors().name);
    assert_eq!(app.form.submit_label(), "Sent!");
}

#[tokio::test]
async fn the_status_returns_to_idle_after_the_reset_delay() {
    let app = spawn_form(Language::En).await;
    app.provider_answers(200).await;
    app.fill_valid();

    app.form.submit().await.unwrap();
    tokio::time::sleep(STATUS_RESET_DELAY + Duration::from_millis(150)).await;

    assert_eq!(app.form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn the_status_returns_to_idle_after_a_failed_delivery() {
    let app = spawn_form(Language::En).await;
    app.provider_answers(500).await;
    app.fill_valid();

    assert_err!(app.form.submit().await);
    assert_eq!(app.form.status(), SubmissionStatus::Error);
    tokio::time::sleep(STATUS_RESET_DELAY + Duration::from_millis(150)).await;

    assert_eq!(app.form.status(), SubmissionStatus::Idle);
    assert_eq!(app.form.submit_label(), "Send");
}

#[tokio::test]
async fn the_provider_receives_the_sanitized_payload() {
    let app = spawn_form(Language::Sk).await;
    app.provider_answers(200).await;
    app.fill_valid();

    app.form.submit().await.unwrap();

    let requests = app.sent_requests().await;
    assert_eq!(requests.len(), 1);
    let body = &requests[0];
    assert_eq!(body["service_id"], "service_6dawfcq");
    assert_eq!(body["template_id"], "template_idqyli6");
    assert_eq!(body["user_id"], "8t0NCezKx7Qq2GX2c");
    let params = &body["template_params"];
    assert_eq!(params["from_name"], "Ursula Le Guin");
    assert_eq!(params["from_email"], "ursula_le_guin@gmail.com");
    assert_eq!(params["phone"], "Neuvedené");
    assert_eq!(params["to_email"], "dreamcity.dcg@gmail.com");
    assert!(params["sent_date"].as_str().is_some_and(|date| !date.is_empty()));
}

#[tokio::test]
async fn a_provided_phone_is_sent_formatted() {
    let app = spawn_form(Language::En).await;
    app.provider_answers(200).await;
    app.fill_valid();
    app.form.set_field(Field::Phone, "+421947171114");

    app.form.submit().await.unwrap();

    let requests = app.sent_requests().await;
    assert_eq!(requests[0]["template_params"]["phone"], "+421 947 171 114");
}

#[tokio::test]
async fn a_provider_failure_ends_in_error_and_keeps_the_input() {
    // Arrange
    let app = spawn_form(Language::En).await;
    app.provider_answers(500).await;
    app.fill_valid();

    // Act
    let outcome = app.form.submit().await;

    // Assert
    assert_matches!(outcome, Err(SubmitError::Delivery(_)));
    assert_eq!(app.form.status(), SubmissionStatus::Error);
    assert_eq!(app.form.input().name, "Ursula Le Guin");
    assert_eq!(
        app.form.notification().unwrap().message,
        "An error occurred while sending the message. Please try again."
    );
    assert_eq!(app.form.submit_label(), "Try again");
}

#[tokio::test]
async fn a_short_message_is_rejected_without_dispatch() {
    let app = spawn_form(Language::En).await;
    Mock::given(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    app.fill("Ursula Le Guin", "ursula_le_guin@gmail.com", "", "hello");

    let outcome = app.form.submit().await;

    match outcome {
        Err(SubmitError::Rejected(rejection)) => {
            assert_eq!(rejection.reason, ReasonCode::MessageTooShort)
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert_eq!(app.form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn every_offending_field_is_flagged_at_once() {
    let app = spawn_form(Language::En).await;
    app.fill("", "not-an-email", "12", "");

    let outcome = app.form.submit().await;

    assert_err!(outcome);
    let errors = app.form.field_errors();
    assert!(errors.name);
    assert!(errors.email);
    assert!(errors.phone);
    assert!(errors.message);
    assert_eq!(
        app.form.notification().unwrap().message,
        "Please fill in all required fields"
    );
}

#[tokio::test]
async fn a_second_submit_while_sending_is_a_no_op() {
    // Arrange
    let app = spawn_form(Language::En).await;
    Mock::given(path("/api/v1.0/email/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&app.email_server)
        .await;
    app.fill_valid();

    // Act
    let in_flight = tokio::spawn({
        let form = app.form.clone();
        async move { form.submit().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Assert
    assert!(app.form.is_disabled());
    assert!(!app.form.set_field(Field::Name, "Someone else"));
    assert_matches!(app.form.submit().await, Err(SubmitError::AlreadySending));
    assert_ok!(in_flight.await.unwrap());
    assert_eq!(app.form.status(), SubmissionStatus::Success);
}
