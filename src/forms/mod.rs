//! Form schemas and the controller shared by the login and registration
//! screens. Schemas are plain tables; the controller owns the per-screen state.

pub mod controller;
pub mod login;
pub mod register;
pub mod schema;

pub use controller::{FormController, SubmitError};
pub use login::Credentials;
pub use register::RegistrationData;
pub use schema::{Field, FieldErrors, FormValues, Rule, Schema};
