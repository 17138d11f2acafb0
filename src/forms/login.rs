//! Login screen: email and password.

use super::controller::FormController;
use super::schema::{Field, FormValues, Rule, Schema};
use secrecy::SecretString;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Credentials handed to the identity provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Reads a validated form. Values are taken as typed.
    #[must_use]
    pub fn from_values(values: &FormValues) -> Self {
        Self::new(values.get(Field::Email), values.get(Field::Password))
    }
}

pub(crate) fn email_rules() -> Vec<Rule> {
    vec![Rule::Required(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)]
}

pub(crate) fn password_rules() -> Vec<Rule> {
    vec![
        Rule::Required(PASSWORD_REQUIRED),
        Rule::MinLength(MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT),
    ]
}

#[must_use]
pub fn schema() -> Schema {
    Schema::new()
        .field(Field::Email, email_rules())
        .field(Field::Password, password_rules())
}

#[must_use]
pub fn form() -> FormController {
    FormController::new(schema())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn malformed_emails_block_submission() {
        for email in ["plainaddress", "missing-at.example.com", "two@@example.com", "trailing@"] {
            let mut form = form();
            form.set_value(Field::Email, email);
            form.set_value(Field::Password, "hunter22");

            assert!(form.begin_submit().is_err(), "{email} must not submit");
            assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));
        }
    }

    #[test]
    fn short_passwords_report_min_length() {
        for password in ["a", "abcde", "12345"] {
            let values = FormValues::new()
                .with(Field::Email, "shopper@example.com")
                .with(Field::Password, password);
            let errors = schema().validate(&values);
            assert_eq!(
                errors.get(&Field::Password).map(String::as_str),
                Some(PASSWORD_TOO_SHORT)
            );
        }
    }

    #[test]
    fn empty_form_reports_required_messages() {
        let errors = schema().validate(&FormValues::new());
        assert_eq!(errors.get(&Field::Email).map(String::as_str), Some(EMAIL_REQUIRED));
        assert_eq!(
            errors.get(&Field::Password).map(String::as_str),
            Some(PASSWORD_REQUIRED)
        );
    }

    #[test]
    fn credentials_from_values() {
        let values = FormValues::new()
            .with(Field::Email, "shopper@example.com")
            .with(Field::Password, "hunter22");
        let credentials = Credentials::from_values(&values);

        assert_eq!(credentials.email, "shopper@example.com");
        assert_eq!(credentials.password.expose_secret(), "hunter22");
        assert!(!format!("{credentials:?}").contains("hunter22"));
    }
}
