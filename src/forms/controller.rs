//! Form state for one screen: values, per-field errors, touched fields and the
//! submit gate. Errors are recomputed for the edited field and for every field
//! whose rules read it, so a confirmation field goes stale the moment the field
//! it mirrors changes.

use super::schema::{Field, FieldErrors, FormValues, Schema};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Clone, Debug)]
pub struct FormController {
    schema: Schema,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_count: u32,
    submitting: bool,
}

impl FormController {
    /// Starts with an empty value for every schema field and no errors.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        let values = schema
            .fields()
            .fold(FormValues::new(), |values, field| values.with(field, ""));

        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
            submitting: false,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Records a keystroke and re-validates the field and its dependents.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        if !self.schema.contains(field) {
            debug!("ignoring value for field {field} outside the schema");
            return;
        }

        self.values.set(field, value);
        self.revalidate(field);
        for dependent in self.schema.dependents(field) {
            self.revalidate(dependent);
        }
    }

    /// Marks a field as visited and re-validates the whole form.
    pub fn blur(&mut self, field: Field) {
        if self.schema.contains(field) {
            self.touched.insert(field);
        }
        self.errors = self.schema.validate(&self.values);
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// All current errors, shown or not.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error to render next to `field`: only once the user left the field
    /// or tried to submit.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) || self.submit_count > 0 {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    #[must_use]
    pub fn visible_errors(&self) -> FieldErrors {
        self.schema
            .fields()
            .filter_map(|field| self.error(field).map(|message| (field, message.to_string())))
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.schema.validate(&self.values).is_empty()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validates every field and, when the form is valid, enters the in-flight
    /// state and hands out a snapshot of the values.
    ///
    /// # Errors
    /// Returns `InFlight` while a previous submission has not finished and
    /// `Invalid` with every failing field otherwise.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        self.submit_count = self.submit_count.saturating_add(1);
        self.touched.extend(self.schema.fields());
        self.errors = self.schema.validate(&self.values);

        if !self.errors.is_empty() {
            debug!(invalid = self.errors.len(), "submission blocked by validation");
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Leaves the in-flight state; values are kept for a retry.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.schema.clone());
    }

    fn revalidate(&mut self, field: Field) {
        match self.schema.validate_field(field, &self.values) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{login, register};

    #[test]
    fn errors_stay_hidden_until_blur() {
        let mut form = login::form();
        form.set_value(Field::Email, "not-an-email");

        assert_eq!(
            form.errors().get(&Field::Email).map(String::as_str),
            Some(login::EMAIL_INVALID)
        );
        assert_eq!(form.error(Field::Email), None);

        form.blur(Field::Email);
        assert_eq!(form.error(Field::Email), Some(login::EMAIL_INVALID));
        assert_eq!(form.error(Field::Password), None);
    }

    #[test]
    fn fixing_a_field_clears_its_error() {
        let mut form = login::form();
        form.set_value(Field::Password, "abc");
        form.blur(Field::Password);
        assert_eq!(form.error(Field::Password), Some(login::PASSWORD_TOO_SHORT));

        form.set_value(Field::Password, "abcdef");
        assert_eq!(form.error(Field::Password), None);
    }

    #[test]
    fn editing_password_revalidates_confirmation() {
        let mut form = register::form();
        form.set_value(Field::Password, "secret1");
        form.set_value(Field::ConfirmPassword, "secret1");
        form.blur(Field::ConfirmPassword);
        assert_eq!(form.error(Field::ConfirmPassword), None);

        form.set_value(Field::Password, "secret2");
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some(register::PASSWORDS_MUST_MATCH)
        );

        form.set_value(Field::Password, "secret1");
        assert_eq!(form.error(Field::ConfirmPassword), None);
    }

    #[test]
    fn invalid_submit_reports_every_field_and_touches_all() {
        let mut form = register::form();
        let Err(SubmitError::Invalid(errors)) = form.begin_submit() else {
            panic!("empty registration form must not submit");
        };

        assert_eq!(errors.len(), 4);
        assert_eq!(form.error(Field::Name), Some(register::NAME_REQUIRED));
        assert_eq!(form.error(Field::Email), Some(login::EMAIL_REQUIRED));
        assert_eq!(form.error(Field::Password), Some(login::PASSWORD_REQUIRED));
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some(register::CONFIRM_PASSWORD_REQUIRED)
        );
        assert!(form.is_touched(Field::Name));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn valid_submit_enters_flight_once() {
        let mut form = login::form();
        form.set_value(Field::Email, "shopper@example.com");
        form.set_value(Field::Password, "hunter22");

        let values = form.begin_submit().expect("valid form");
        assert_eq!(values.get(Field::Email), "shopper@example.com");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(form.submit_count(), 1);

        form.finish_submit();
        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Password), "hunter22");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn fields_outside_the_schema_are_ignored() {
        let mut form = login::form();
        form.set_value(Field::Name, "someone");
        assert_eq!(form.value(Field::Name), "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut form = login::form();
        form.set_value(Field::Email, "x");
        let _ = form.begin_submit();
        form.reset();

        assert_eq!(form.value(Field::Email), "");
        assert!(form.errors().is_empty());
        assert!(form.visible_errors().is_empty());
        assert_eq!(form.submit_count(), 0);
    }
}
