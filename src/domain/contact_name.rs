use validator::{Validate, ValidationError};

fn validate_contact_name(s: &str) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::new("Contact name cannot be empty"));
    }
    Ok(())
}

/// Name of the person writing to the agency, kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactName {
    #[validate(custom(function = "validate_contact_name"))]
    name: String,
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for ContactName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let s = ContactName { name: value };
        match s.validate() {
            Ok(_) => Ok(s),
            Err(_) => Err(format!("'{}' is not a valid contact name", s.name)),
        }
    }
}
