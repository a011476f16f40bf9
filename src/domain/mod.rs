mod contact_email;
mod contact_name;
mod content_filter;
mod email_domain;
mod form_input;
mod language;
mod payload;
mod phone_number;
mod submission;
mod validation;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use content_filter::{
    ContentRejection, MAX_MESSAGE_LENGTH, MIN_MESSAGE_LENGTH, SpamPattern, validate_content,
};
pub use email_domain::{DomainKind, DomainRejection, validate_email_domain};
pub use form_input::{Field, FieldErrors, FormInput};
pub use language::Language;
pub use payload::{SanitizedPayload, format_sent_date};
pub use phone_number::{
    PhoneNumber, PhoneRegion, PhoneRejection, format_phone_number, validate_phone_number,
};
pub use submission::{SubmissionStatus, TransitionError};
pub use validation::{
    ContactRequest, ReasonCode, Rejection, RejectionDetail, SubmissionCheck, ValidationOutcome,
    validate_submission,
};
