use crate::domain::{ContactEmail, ContactName};

/// Raw contents of the contact form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl FormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

/// Which fields to highlight after a submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub message: bool,
}

impl FieldErrors {
    /// Presence and format check.
    ///
    /// Name, email and message must not be blank and the email must look like
    /// `local@domain.tld`. The phone is optional and never flagged here.
    pub fn check(input: &FormInput) -> Self {
        Self {
            name: ContactName::try_from(input.name.clone()).is_err(),
            email: ContactEmail::try_from(input.email.clone()).is_err(),
            phone: false,
            message: input.message.trim().is_empty(),
        }
    }

    pub fn any(&self) -> bool {
        self.name || self.email || self.phone || self.message
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldErrors, FormInput};

    fn filled() -> FormInput {
        FormInput {
            name: "Jana".into(),
            email: "jana@azet.sk".into(),
            phone: "".into(),
            message: "Mám záujem o byt.".into(),
        }
    }

    #[test]
    fn a_filled_form_has_no_field_errors() {
        assert_eq!(FieldErrors::check(&filled()), FieldErrors::default());
    }

    #[test]
    fn an_empty_form_flags_every_required_field() {
        let errors = FieldErrors::check(&FormInput::default());
        assert_eq!(
            errors,
            FieldErrors {
                name: true,
                email: true,
                phone: false,
                message: true,
            }
        );
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let mut input = filled();
        input.name = "  ".into();
        input.message = "\n\t".into();
        let errors = FieldErrors::check(&input);
        assert!(errors.name);
        assert!(errors.message);
        assert!(!errors.email);
    }

    #[test]
    fn a_malformed_email_is_flagged() {
        let mut input = filled();
        input.email = "jana.azet.sk".into();
        assert!(FieldErrors::check(&input).email);
    }

    #[test]
    fn a_missing_phone_is_not_an_error() {
        let errors = FieldErrors::check(&filled());
        assert!(!errors.phone);
        assert!(!errors.any());
    }

    #[test]
    fn fields_are_addressable_by_name() {
        let mut input = FormInput::default();
        input.set(Field::Message, "Dobrý deň".into());
        assert_eq!(input.get(Field::Message), "Dobrý deň");
        assert_eq!(input.get(Field::Name), "");
    }
}
