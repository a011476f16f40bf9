use crate::domain::{Field, Language, ReasonCode, SubmissionStatus};
use std::borrow::Cow;
use std::collections::HashMap;

/// Every localized string the contact form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Reason(ReasonCode),
    Success,
    PhoneNotProvided,
    FieldLabel(Field),
    SubmitLabel(SubmissionStatus),
}

impl From<ReasonCode> for MessageKey {
    fn from(reason: ReasonCode) -> Self {
        MessageKey::Reason(reason)
    }
}

use self::MessageKey::{FieldLabel, PhoneNotProvided, Reason, SubmitLabel, Success};

const RU: &[(MessageKey, &str)] = &[
    (Reason(ReasonCode::FillRequired), "Пожалуйста, заполните все обязательные поля"),
    (Reason(ReasonCode::InvalidEmail), "Пожалуйста, введите корректный email адрес"),
    (Reason(ReasonCode::InvalidEmailDomain), "Пожалуйста, используйте действующий email адрес"),
    (Reason(ReasonCode::InvalidPhone), "Пожалуйста, введите корректный номер телефона"),
    (
        Reason(ReasonCode::SpamDetected),
        "Ваше сообщение содержит недопустимый контент. Пожалуйста, измените текст.",
    ),
    (Reason(ReasonCode::MessageTooShort), "Сообщение слишком короткое. Напишите более подробно."),
    (Reason(ReasonCode::MessageTooLong), "Сообщение слишком длинное. Сократите текст."),
    (
        Reason(ReasonCode::SuspiciousContent),
        "Недопустимая форма сообщения. Проверьте введенный текст.",
    ),
    (Reason(ReasonCode::Error), "Произошла ошибка при отправке сообщения. Попробуйте еще раз."),
    (Success, "Сообщение успешно отправлено! Мы свяжемся с вами в ближайшее время."),
    (PhoneNotProvided, "Не указан"),
    (FieldLabel(Field::Name), "Имя"),
    (FieldLabel(Field::Email), "Email"),
    (FieldLabel(Field::Phone), "Телефон"),
    (FieldLabel(Field::Message), "Сообщение"),
    (SubmitLabel(SubmissionStatus::Idle), "Отправить"),
    (SubmitLabel(SubmissionStatus::Sending), "Отправляется..."),
    (SubmitLabel(SubmissionStatus::Success), "Отправлено!"),
    (SubmitLabel(SubmissionStatus::Error), "Попробовать снова"),
];

const SK: &[(MessageKey, &str)] = &[
    (Reason(ReasonCode::FillRequired), "Prosím, vyplňte všetky povinné polia"),
    (Reason(ReasonCode::InvalidEmail), "Prosím, zadajte správnu emailovú adresu"),
    (Reason(ReasonCode::InvalidEmailDomain), "Prosím, použite funkčnú emailovú adresu"),
    (Reason(ReasonCode::InvalidPhone), "Prosím, zadajte správne telefónne číslo"),
    (
        Reason(ReasonCode::SpamDetected),
        "Vaša správa obsahuje neprijateľný obsah. Prosím, zmeňte text.",
    ),
    (Reason(ReasonCode::MessageTooShort), "Správa je príliš krátka. Napíšte podrobnejšie."),
    (Reason(ReasonCode::MessageTooLong), "Správa je príliš dlhá. Skráťte text."),
    (Reason(ReasonCode::SuspiciousContent), "Neprípustná forma správy. Skontrolujte zadaný text."),
    (Reason(ReasonCode::Error), "Nastala chyba pri odosielaní správy. Skúste to znova."),
    (Success, "Správa bola úspešne odoslaná! Skontaktujeme sa s vami čoskoro."),
    (PhoneNotProvided, "Neuvedené"),
    (FieldLabel(Field::Name), "Meno"),
    (FieldLabel(Field::Email), "Email"),
    (FieldLabel(Field::Phone), "Telefón"),
    (FieldLabel(Field::Message), "Správa"),
    (SubmitLabel(SubmissionStatus::Idle), "Odoslať"),
    (SubmitLabel(SubmissionStatus::Sending), "Odosielam..."),
    (SubmitLabel(SubmissionStatus::Success), "Odoslané!"),
    (SubmitLabel(SubmissionStatus::Error), "Skúsiť znova"),
];

const EN: &[(MessageKey, &str)] = &[
    (Reason(ReasonCode::FillRequired), "Please fill in all required fields"),
    (Reason(ReasonCode::InvalidEmail), "Please enter a valid email address"),
    (Reason(ReasonCode::InvalidEmailDomain), "Please use a working email address"),
    (Reason(ReasonCode::InvalidPhone), "Please enter a valid phone number"),
    (
        Reason(ReasonCode::SpamDetected),
        "Your message contains inappropriate content. Please modify your text.",
    ),
    (Reason(ReasonCode::MessageTooShort), "Message is too short. Please write in more detail."),
    (Reason(ReasonCode::MessageTooLong), "Message is too long. Please shorten the text."),
    (
        Reason(ReasonCode::SuspiciousContent),
        "Invalid message format. Please check the entered text.",
    ),
    (Reason(ReasonCode::Error), "An error occurred while sending the message. Please try again."),
    (Success, "Message sent successfully! We will contact you soon."),
    (PhoneNotProvided, "Not provided"),
    (FieldLabel(Field::Name), "Name"),
    (FieldLabel(Field::Email), "Email"),
    (FieldLabel(Field::Phone), "Phone"),
    (FieldLabel(Field::Message), "Message"),
    (SubmitLabel(SubmissionStatus::Idle), "Send"),
    (SubmitLabel(SubmissionStatus::Sending), "Sending..."),
    (SubmitLabel(SubmissionStatus::Success), "Sent!"),
    (SubmitLabel(SubmissionStatus::Error), "Try again"),
];

/// Localized strings keyed by language and [`MessageKey`].
///
/// Lookups fall back to English when a language has no entry for a key.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    entries: HashMap<(Language, MessageKey), Cow<'static, str>>,
}

impl MessageCatalog {
    pub fn builtin() -> Self {
        let tables = [(Language::Ru, RU), (Language::Sk, SK), (Language::En, EN)];
        let entries = tables
            .into_iter()
            .flat_map(|(language, table)| {
                table
                    .iter()
                    .map(move |(key, text)| ((language, *key), Cow::Borrowed(*text)))
            })
            .collect();
        Self { entries }
    }

    /// Replaces or adds a single entry.
    pub fn insert(
        &mut self,
        language: Language,
        key: MessageKey,
        text: impl Into<Cow<'static, str>>,
    ) {
        self.entries.insert((language, key), text.into());
    }

    pub fn remove(&mut self, language: Language, key: MessageKey) {
        self.entries.remove(&(language, key));
    }

    pub fn lookup(&self, language: Language, key: impl Into<MessageKey>) -> &str {
        let key = key.into();
        self.entries
            .get(&(language, key))
            .or_else(|| self.entries.get(&(Language::En, key)))
            .map(|text| &**text)
            .unwrap_or_default()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
