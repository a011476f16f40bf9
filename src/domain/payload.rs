use crate::domain::{ContactEmail, ContactRequest, Language};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Template parameters handed to the email-delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedPayload {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub sent_date: String,
    pub to_email: String,
}

impl SanitizedPayload {
    /// `phone_placeholder` is sent when the phone field was left blank.
    pub fn new(
        request: &ContactRequest,
        recipient: &ContactEmail,
        language: Language,
        sent_at: NaiveDateTime,
        phone_placeholder: &str,
    ) -> Self {
        let phone = match request.phone() {
            Some(phone) => phone.as_ref().to_string(),
            None => phone_placeholder.to_string(),
        };
        Self {
            from_name: request.name().as_ref().to_string(),
            from_email: request.email().as_ref().to_string(),
            phone,
            message: request.message().to_string(),
            sent_date: format_sent_date(sent_at, language),
            to_email: recipient.as_ref().to_string(),
        }
    }
}

/// Formats a timestamp the way each locale writes dates.
pub fn format_sent_date(sent_at: NaiveDateTime, language: Language) -> String {
    let pattern = match language {
        Language::Ru => "%d.%m.%Y, %H:%M:%S",
        Language::Sk => "%-d. %-m. %Y %-H:%M:%S",
        Language::En => "%-m/%-d/%Y, %-I:%M:%S %p",
    };
    sent_at.format(pattern).to_string()
}
