//! Registration screen: username, email, password and its confirmation.

use super::controller::FormController;
use super::login::{self, Credentials};
use super::schema::{Field, FormValues, Rule, Schema};
use secrecy::{ExposeSecret, SecretString};

pub const MIN_NAME_LENGTH: usize = 4;

pub const NAME_REQUIRED: &str = "Username is required";
pub const NAME_TOO_SHORT: &str = "Username must be at least 4 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";

#[derive(Clone, Debug)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    /// Only ever compared locally; never sent to the account service.
    pub confirm_password: SecretString,
}

impl RegistrationData {
    #[must_use]
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get(Field::Name).to_string(),
            email: values.get(Field::Email).to_string(),
            password: SecretString::from(values.get(Field::Password).to_string()),
            confirm_password: SecretString::from(values.get(Field::ConfirmPassword).to_string()),
        }
    }

    /// Credentials for the sign-in that follows account creation.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.expose_secret())
    }
}

#[must_use]
pub fn schema() -> Schema {
    Schema::new()
        .field(
            Field::Name,
            vec![
                Rule::Required(NAME_REQUIRED),
                Rule::MinLength(MIN_NAME_LENGTH, NAME_TOO_SHORT),
            ],
        )
        .field(Field::Email, login::email_rules())
        .field(Field::Password, login::password_rules())
        .field(
            Field::ConfirmPassword,
            vec![
                Rule::Required(CONFIRM_PASSWORD_REQUIRED),
                Rule::EqualsField(Field::Password, PASSWORDS_MUST_MATCH),
            ],
        )
}

#[must_use]
pub fn form() -> FormController {
    FormController::new(schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues::new()
            .with(Field::Name, "shopper")
            .with(Field::Email, "shopper@example.com")
            .with(Field::Password, "hunter22")
            .with(Field::ConfirmPassword, "hunter22")
    }

    #[test]
    fn complete_registration_is_valid() {
        assert!(schema().validate(&filled()).is_empty());
    }

    #[test]
    fn short_names_are_rejected() {
        let values = filled().with(Field::Name, "bob");
        let errors = schema().validate(&values);
        assert_eq!(errors.get(&Field::Name).map(String::as_str), Some(NAME_TOO_SHORT));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn lengths_follow_utf16_units() {
        let values = filled()
            .with(Field::Name, "😀😀")
            .with(Field::Password, "😀😀😀")
            .with(Field::ConfirmPassword, "😀😀😀");
        assert!(schema().validate(&values).is_empty());

        let errors = schema().validate(&filled().with(Field::Name, "😀"));
        assert_eq!(errors.get(&Field::Name).map(String::as_str), Some(NAME_TOO_SHORT));
    }

    #[test]
    fn short_passwords_report_min_length() {
        let values = filled()
            .with(Field::Password, "abc")
            .with(Field::ConfirmPassword, "abc");
        let errors = schema().validate(&values);
        assert_eq!(
            errors.get(&Field::Password).map(String::as_str),
            Some(login::PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        for (password, confirm) in [("hunter22", "hunter23"), ("abcdefg", "ABCDEFG"), ("secret1", "secret1 ")] {
            let mut form = form();
            form.set_value(Field::Name, "shopper");
            form.set_value(Field::Email, "shopper@example.com");
            form.set_value(Field::Password, password);
            form.set_value(Field::ConfirmPassword, confirm);

            assert!(form.begin_submit().is_err());
            assert_eq!(form.error(Field::ConfirmPassword), Some(PASSWORDS_MUST_MATCH));
        }
    }

    #[test]
    fn sign_in_credentials_come_from_registration() {
        let data = RegistrationData::from_values(&filled());
        let credentials = data.credentials();
        assert_eq!(credentials.email, "shopper@example.com");
        assert_eq!(credentials.password.expose_secret(), "hunter22");
        assert_eq!(data.confirm_password.expose_secret(), "hunter22");
    }
}
