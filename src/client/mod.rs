//! `reqwest` adapters for a next-auth compatible backend.
//!
//! Every request goes through one client per adapter with the configured
//! timeout and the crate user agent. HTTP failures are turned into
//! [`AppError::Http`] with a short, user-presentable message.

pub mod account;
pub mod identity;

pub use account::HttpAccountService;
pub use identity::HttpIdentityProvider;

use crate::{APP_USER_AGENT, AppConfig, AppError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Builds the HTTP client shared by an adapter. The cookie store keeps the
/// CSRF and session cookies between calls.
///
/// # Errors
/// Returns `AppError::Config` when the TLS backend cannot be initialized.
pub fn http_client(config: &AppConfig) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(config.request_timeout)
        .cookie_store(true)
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))
}

/// Maps transport errors into `AppError` variants with timeout detection.
pub(crate) fn map_request_error(err: &reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
pub(crate) async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        decode_json(response).await
    } else {
        Err(http_error(response).await)
    }
}

/// Decodes a JSON body regardless of the status.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Accepts any successful response and ignores its body.
pub(crate) async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response(status, &body)
}
