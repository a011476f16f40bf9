use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

fn validate_email_shape(s: &str) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::new("Email cannot be empty"));
    }
    if !EMAIL_SHAPE.is_match(s) {
        return Err(ValidationError::new("Email must look like local@domain.tld"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Validate, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct ContactEmail {
    #[validate(custom(function = "validate_email_shape"))]
    email: String,
}

impl ContactEmail {
    /// Lower-cased part after the `@`.
    pub fn domain(&self) -> String {
        self.email
            .split('@')
            .nth(1)
            .unwrap_or_default()
            .to_lowercase()
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.email.fmt(f)
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let contact_email = Self { email: value };
        match contact_email.validate() {
            Ok(_) => Ok(contact_email),
            Err(_) => Err(format!(
                "'{}' is not a valid contact email",
                contact_email.email
            )),
        }
    }
}
