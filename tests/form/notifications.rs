use crate::helpers::{NOTIFICATION_TIMEOUT, spawn_form};
use dreamcity_contact::NotificationKind;
use dreamcity_contact::domain::Language;
use std::time::Duration;

#[tokio::test]
async fn a_successful_submit_shows_a_localized_success_notification() {
    let app = spawn_form(Language::Ru).await;
    app.provider_answers(200).await;
    app.fill_valid();

    app.form.submit().await.unwrap();

    let notification = app.form.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        notification.message,
        "Сообщение успешно отправлено! Мы свяжемся с вами в ближайшее время."
    );
}

#[tokio::test]
async fn the_notification_is_dismissed_after_the_timeout() {
    let app = spawn_form(Language::En).await;
    let _ = app.form.submit().await;
    assert!(app.form.notification().is_some());

    tokio::time::sleep(NOTIFICATION_TIMEOUT + Duration::from_millis(150)).await;

    assert!(app.form.notification().is_none());
}

#[tokio::test]
async fn an_older_timer_does_not_dismiss_a_newer_notification() {
    let app = spawn_form(Language::En).await;
    let _ = app.form.submit().await;
    tokio::time::sleep(NOTIFICATION_TIMEOUT / 2).await;

    app.fill("Ursula Le Guin", "ursula_le_guin@gmail.com", "", "hello");
    let _ = app.form.submit().await;
    tokio::time::sleep(NOTIFICATION_TIMEOUT / 2 + Duration::from_millis(50)).await;

    let notification = app.form.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "Message is too short. Please write in more detail."
    );
}
