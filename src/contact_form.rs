use crate::catalog::{MessageCatalog, MessageKey};
use crate::domain::{
    ContactEmail, Field, FieldErrors, FormInput, Language, ReasonCode, Rejection,
    SanitizedPayload, SubmissionStatus, format_phone_number, validate_submission,
};
use crate::email_client::EmailClient;
use anyhow::Context;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use uuid::Uuid;

/// Fixed values a form instance is built with.
#[derive(Debug, Clone)]
pub struct FormSettings {
    pub service_id: String,
    pub template_id: String,
    /// Where every contact request is delivered.
    pub recipient: ContactEmail,
    pub language: Language,
    pub notification_timeout: Duration,
    pub status_reset_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// The banner shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    AlreadySending,
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("Failed to deliver the contact request")]
    Delivery(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(Default)]
struct FormState {
    input: FormInput,
    field_errors: FieldErrors,
    status: SubmissionStatus,
    language: Language,
    notification: Option<Notification>,
    // Bumped on every change so a stale timer can tell it was superseded.
    status_generation: u64,
    notification_generation: u64,
}

impl FormState {
    fn notify(&mut self, kind: NotificationKind, message: &str) -> u64 {
        self.notification_generation += 1;
        self.notification = Some(Notification {
            kind,
            message: message.to_string(),
        });
        self.notification_generation
    }
}

struct Inner {
    state: Mutex<FormState>,
    email_client: EmailClient,
    settings: FormSettings,
    catalog: MessageCatalog,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One contact form instance.
///
/// Cloning gives another handle to the same form. Timers scheduled by
/// [`ContactForm::submit`] need a running tokio runtime and stop quietly once
/// every handle is dropped.
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

impl ContactForm {
    pub fn new(email_client: EmailClient, settings: FormSettings, catalog: MessageCatalog) -> Self {
        let state = FormState {
            language: settings.language,
            ..FormState::default()
        };
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                email_client,
                settings,
                catalog,
            }),
        }
    }

    pub fn from_settings(email_client: EmailClient, settings: FormSettings) -> Self {
        Self::new(email_client, settings, MessageCatalog::builtin())
    }

    /// Writes a field the way a keystroke would.
    ///
    /// Phone values are normalised on the way in. Returns `false` and leaves
    /// the form untouched while a submission is in flight.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> bool {
        let mut state = self.inner.lock();
        if state.status.is_locked() {
            return false;
        }
        let value = value.into();
        let value = match field {
            Field::Phone => format_phone_number(&value),
            _ => value,
        };
        state.input.set(field, value);
        true
    }

    pub fn input(&self) -> FormInput {
        self.inner.lock().input.clone()
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.inner.lock().field_errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status
    }

    /// Fields and the submit control are disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.lock().status.is_locked()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.inner.lock().notification.clone()
    }

    pub fn dismiss_notification(&self) {
        let mut state = self.inner.lock();
        state.notification = None;
        state.notification_generation += 1;
    }

    pub fn language(&self) -> Language {
        self.inner.lock().language
    }

    pub fn set_language(&self, language: Language) {
        self.inner.lock().language = language;
    }

    /// Localized label for the submit control in the current state.
    pub fn submit_label(&self) -> String {
        let state = self.inner.lock();
        self.inner
            .catalog
            .lookup(state.language, MessageKey::SubmitLabel(state.status))
            .to_string()
    }

    pub fn label(&self, field: Field) -> String {
        let language = self.language();
        self.inner
            .catalog
            .lookup(language, MessageKey::FieldLabel(field))
            .to_string()
    }

    /// Validates the current input and, if it passes, hands it to the email
    /// provider.
    ///
    /// Every outcome except [`SubmitError::AlreadySending`] leaves a
    /// notification behind.
    #[tracing::instrument(
        name = "Submitting the contact form",
        skip(self),
        fields(submission_id = %Uuid::new_v4(), language = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let (input, language) = {
            let mut state = self.inner.lock();
            state.status = state
                .status
                .begin()
                .map_err(|_| SubmitError::AlreadySending)?;
            state.status_generation += 1;
            (state.input.clone(), state.language)
        };
        tracing::Span::current().record("language", tracing::field::display(language));

        let check = validate_submission(&input);
        let request = match check.outcome {
            Ok(request) => {
                self.inner.lock().field_errors = check.field_errors;
                request
            }
            Err(rejection) => {
                tracing::info!(reason = %rejection.reason, "Contact request rejected");
                let generation = {
                    let mut state = self.inner.lock();
                    state.field_errors = check.field_errors;
                    if let Ok(next) = state.status.abort() {
                        state.status = next;
                    }
                    let message = self.inner.catalog.lookup(language, rejection.reason);
                    state.notify(NotificationKind::Error, message)
                };
                self.schedule_notification_dismissal(generation);
                return Err(SubmitError::Rejected(rejection));
            }
        };

        let payload = SanitizedPayload::new(
            &request,
            &self.inner.settings.recipient,
            language,
            chrono::Local::now().naive_local(),
            self.inner
                .catalog
                .lookup(language, MessageKey::PhoneNotProvided),
        );
        let outcome = self
            .inner
            .email_client
            .send(
                &self.inner.settings.service_id,
                &self.inner.settings.template_id,
                &payload,
            )
            .await
            .context("The email provider did not accept the contact request");

        let (status_generation, notification_generation) = {
            let mut state = self.inner.lock();
            if let Ok(next) = state.status.complete(outcome.is_ok()) {
                state.status = next;
            }
            let notification_generation = match &outcome {
                Ok(()) => {
                    state.input = FormInput::default();
                    state.field_errors = FieldErrors::default();
                    let message = self.inner.catalog.lookup(language, MessageKey::Success);
                    state.notify(NotificationKind::Success, message)
                }
                Err(_) => {
                    let message = self.inner.catalog.lookup(language, ReasonCode::Error);
                    state.notify(NotificationKind::Error, message)
                }
            };
            (state.status_generation, notification_generation)
        };
        self.schedule_status_reset(status_generation);
        self.schedule_notification_dismissal(notification_generation);

        match outcome {
            Ok(()) => {
                tracing::info!("Contact request delivered");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver the contact request"
                );
                Err(SubmitError::Delivery(e))
            }
        }
    }

    fn schedule_status_reset(&self, generation: u64) {
        let delay = self.inner.settings.status_reset_delay;
        spawn_after(&self.inner, delay, move |state| {
            if state.status_generation != generation {
                return;
            }
            if let Ok(next) = state.status.reset() {
                state.status = next;
            }
        });
    }

    fn schedule_notification_dismissal(&self, generation: u64) {
        let delay = self.inner.settings.notification_timeout;
        spawn_after(&self.inner, delay, move |state| {
            if state.notification_generation == generation {
                state.notification = None;
            }
        });
    }
}

fn spawn_after<F>(inner: &Arc<Inner>, delay: Duration, apply: F)
where
    F: FnOnce(&mut FormState) + Send + 'static,
{
    let inner: Weak<Inner> = Arc::downgrade(inner);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Some(inner) = inner.upgrade() {
            apply(&mut inner.lock());
        }
    });
}
