//! Declarative validation: each field maps to an ordered list of rules and the
//! first failing rule supplies the field's message. Empty values are only ever
//! reported by [`Rule::Required`]; every other rule skips them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// WHATWG "valid e-mail address" pattern.
static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Form fields known to the two screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used in form markup and error maps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Field name to message. Rebuilt per field, never merged across fields.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw field values as typed by the user. Missing fields read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    /// At least this many UTF-16 code units, the way browsers report length.
    MinLength(usize, &'static str),
    /// Value must equal the current value of another field.
    EqualsField(Field, &'static str),
}

impl Rule {
    fn check(&self, value: &str, values: &FormValues) -> Result<(), &'static str> {
        if let Rule::Required(message) = self {
            return if value.is_empty() { Err(*message) } else { Ok(()) };
        }
        if value.is_empty() {
            return Ok(());
        }

        let passes = match self {
            Rule::Required(_) => true,
            Rule::MinLength(min, _) => value.encode_utf16().count() >= *min,
            Rule::Email(_) => is_valid_email(value),
            Rule::EqualsField(other, _) => value == values.get(*other),
        };

        if passes {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::Email(message)
            | Rule::EqualsField(_, message) => *message,
        }
    }
}

#[derive(Clone, Debug)]
struct FieldRules {
    field: Field,
    rules: Vec<Rule>,
}

/// Ordered table of fields and their rules.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any rules already declared for it.
    #[must_use]
    pub fn field(mut self, field: Field, rules: Vec<Rule>) -> Self {
        self.fields.retain(|entry| entry.field != field);
        self.fields.push(FieldRules { field, rules });
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|entry| entry.field == field)
    }

    /// First failing message for `field`, or `None` when it is valid or unknown.
    #[must_use]
    pub fn validate_field(&self, field: Field, values: &FormValues) -> Option<String> {
        let entry = self.fields.iter().find(|entry| entry.field == field)?;
        let value = values.get(field);

        entry
            .rules
            .iter()
            .find_map(|rule| rule.check(value, values).err())
            .map(str::to_string)
    }

    /// Every invalid field with its message.
    #[must_use]
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        self.fields()
            .filter_map(|field| {
                self.validate_field(field, values)
                    .map(|message| (field, message))
            })
            .collect()
    }

    /// Fields whose rules read `field`, so they must be re-validated when it changes.
    #[must_use]
    pub fn dependents(&self, field: Field) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|entry| {
                entry.field != field
                    && entry
                        .rules
                        .iter()
                        .any(|rule| matches!(rule, Rule::EqualsField(other, _) if *other == field))
            })
            .map(|entry| entry.field)
            .collect()
    }
}
