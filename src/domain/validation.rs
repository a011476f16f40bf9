use crate::domain::{
    ContactEmail, ContactName, ContentRejection, DomainKind, DomainRejection, FieldErrors,
    FormInput, PhoneNumber, PhoneRejection, validate_content, validate_email_domain,
    validate_phone_number,
};
use std::fmt;

/// Why a submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    FillRequired,
    InvalidEmail,
    InvalidEmailDomain,
    InvalidPhone,
    SpamDetected,
    MessageTooShort,
    MessageTooLong,
    SuspiciousContent,
    /// The provider failed to deliver an otherwise valid request.
    Error,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::FillRequired => "fillRequired",
            ReasonCode::InvalidEmail => "invalidEmail",
            ReasonCode::InvalidEmailDomain => "invalidEmailDomain",
            ReasonCode::InvalidPhone => "invalidPhone",
            ReasonCode::SpamDetected => "spamDetected",
            ReasonCode::MessageTooShort => "messageTooShort",
            ReasonCode::MessageTooLong => "messageTooLong",
            ReasonCode::SuspiciousContent => "suspiciousContent",
            ReasonCode::Error => "error",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentRejection> for ReasonCode {
    fn from(rejection: ContentRejection) -> Self {
        match rejection {
            ContentRejection::TooShort => ReasonCode::MessageTooShort,
            ContentRejection::TooLong => ReasonCode::MessageTooLong,
            ContentRejection::SuspiciousPattern(_) | ContentRejection::SuspiciousEmail => {
                ReasonCode::SuspiciousContent
            }
            ContentRejection::SpamKeyword(_) => ReasonCode::SpamDetected,
        }
    }
}

/// The check-specific verdict behind a [`ReasonCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectionDetail {
    #[error(transparent)]
    Phone(PhoneRejection),
    #[error(transparent)]
    Domain(DomainRejection),
    #[error(transparent)]
    Content(ContentRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("submission rejected: {reason}")]
pub struct Rejection {
    pub reason: ReasonCode,
    #[source]
    pub detail: Option<RejectionDetail>,
}

impl Rejection {
    pub fn new(reason: ReasonCode) -> Self {
        Self {
            reason,
            detail: None,
        }
    }

    pub fn with_detail(reason: ReasonCode, detail: RejectionDetail) -> Self {
        Self {
            reason,
            detail: Some(detail),
        }
    }
}

/// A contact request whose every field passed validation.
///
/// Only [`validate_submission`] builds one, so holding a `ContactRequest` is
/// proof that the whole pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    name: ContactName,
    email: ContactEmail,
    email_domain: DomainKind,
    phone: Option<PhoneNumber>,
    message: String,
}

impl ContactRequest {
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    pub fn email_domain(&self) -> DomainKind {
        self.email_domain
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ValidationOutcome = Result<ContactRequest, Rejection>;

/// Result of running a form through every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCheck {
    pub field_errors: FieldErrors,
    pub outcome: ValidationOutcome,
}

/// Runs the full validation pipeline over a form.
///
/// The field errors flag every offending field at once, while the outcome names
/// only the first failing stage: presence, email shape, phone, email domain,
/// then content.
pub fn validate_submission(input: &FormInput) -> SubmissionCheck {
    let mut field_errors = FieldErrors::check(input);
    if validate_phone_number(&input.phone).is_err() {
        field_errors.phone = true;
    }
    if !field_errors.email && validate_email_domain(&input.email).is_err() {
        field_errors.email = true;
    }

    SubmissionCheck {
        field_errors,
        outcome: run_pipeline(input),
    }
}

fn run_pipeline(input: &FormInput) -> ValidationOutcome {
    let (Ok(name), false, false) = (
        ContactName::try_from(input.name.clone()),
        input.email.trim().is_empty(),
        input.message.trim().is_empty(),
    ) else {
        return Err(Rejection::new(ReasonCode::FillRequired));
    };
    let email = ContactEmail::try_from(input.email.clone())
        .map_err(|_| Rejection::new(ReasonCode::InvalidEmail))?;
    let phone = PhoneNumber::parse_optional(&input.phone).map_err(|e| {
        Rejection::with_detail(ReasonCode::InvalidPhone, RejectionDetail::Phone(e))
    })?;
    let email_domain = validate_email_domain(email.as_ref()).map_err(|e| {
        Rejection::with_detail(ReasonCode::InvalidEmailDomain, RejectionDetail::Domain(e))
    })?;
    validate_content(input)
        .map_err(|e| Rejection::with_detail(e.into(), RejectionDetail::Content(e)))?;

    Ok(ContactRequest {
        name,
        email,
        email_domain,
        phone,
        message: input.message.clone(),
    })
}
