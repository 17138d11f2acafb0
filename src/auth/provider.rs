//! Contracts with the external identity provider and account service.
//!
//! The methods are `async fn` without `Send` bounds so the same handlers run on
//! a multi-threaded runtime and in the single-threaded browser.

#![allow(async_fn_in_trait)]

use crate::errors::AppError;
use crate::forms::{Credentials, RegistrationData};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use url::form_urlencoded;

pub const SIGN_UP_PATH: &str = "/api/auth/signup";
pub const CSRF_PATH: &str = "/api/auth/csrf";
pub const SESSION_PATH: &str = "/api/auth/session";
pub const CALLBACK_PATH: &str = "/api/auth/callback";
/// Asks the provider to answer with `{"url": ...}` instead of a redirect.
pub const RETURN_REDIRECT_HEADER: &str = "X-Auth-Return-Redirect";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `GET /api/auth/csrf` reply.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfToken {
    pub csrf_token: String,
}

/// Callback reply when [`RETURN_REDIRECT_HEADER`] is set.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CallbackReply {
    #[serde(default)]
    pub url: Option<String>,
}

/// Path of the sign-in callback for `method`.
#[must_use]
pub fn callback_path(method: &str) -> String {
    format!("{CALLBACK_PATH}/{method}")
}

/// Credential sign-in request. `redirect: false` asks the provider to report
/// the result instead of navigating.
#[derive(Clone, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: SecretString,
    pub redirect: bool,
}

impl SignInRequest {
    #[must_use]
    pub fn without_redirect(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            redirect: false,
        }
    }

    /// Form-encoded callback body. This is the only place the password is
    /// exposed on the way out.
    #[must_use]
    pub fn callback_body(&self, csrf_token: &str, callback_url: &str) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("email", &self.email)
            .append_pair("password", self.password.expose_secret())
            .append_pair("redirect", if self.redirect { "true" } else { "false" })
            .append_pair("csrfToken", csrf_token)
            .append_pair("callbackUrl", callback_url)
            .append_pair("json", "true")
            .finish()
    }
}

/// Result of a sign-in call that reached the provider. A present, non-empty
/// `error` means the credentials were rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub url: Option<String>,
}

impl SignInResponse {
    /// Builds the result of a callback reply. A sign-in error travels as the
    /// `error` query parameter of the returned URL.
    #[must_use]
    pub fn from_callback(status: u16, reply: CallbackReply) -> Self {
        let error = reply.url.as_deref().and_then(error_from_url);
        Self {
            url: if error.is_some() { None } else { reply.url },
            error,
            status,
            ok: (200..300).contains(&status),
        }
    }

    /// The rejection reason, treating an empty string as no error.
    #[must_use]
    pub fn rejection(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}

/// Body for `POST /api/auth/signup`. The confirmation field is never sent.
#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl From<&RegistrationData> for SignUpRequest {
    fn from(data: &RegistrationData) -> Self {
        Self {
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
        }
    }
}

/// The `error` query parameter of a callback URL.
fn error_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "error")
        .map(|(_, value)| value.into_owned())
        .filter(|error| !error.is_empty())
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

pub trait IdentityProvider {
    /// Signs in with `method` (for example `credentials`).
    ///
    /// # Errors
    /// Only when the call itself fails; rejected credentials come back as
    /// [`SignInResponse::error`].
    async fn sign_in(&self, method: &str, request: &SignInRequest) -> Result<SignInResponse, AppError>;
}

pub trait AccountService {
    /// Creates an account. Any non-error reply counts as success.
    ///
    /// # Errors
    /// Returns the failure, carrying the service's `message` when it sent one.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError>;
}
