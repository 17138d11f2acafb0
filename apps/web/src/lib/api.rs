//! HTTP helpers for the identity provider and account service with consistent
//! timeouts and error handling. Every call includes cookies so the provider's
//! CSRF and session cookies travel with it. Callers must not log bodies, which
//! may carry credentials.

use super::AppError;
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use storefront_auth::AppConfig;
use web_sys::{AbortController, AbortSignal, RequestCredentials};

/// Fetches JSON and surfaces HTTP errors.
pub async fn get_json<T: DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, AppError> {
    let url = config.endpoint(path);
    let response = send_with_timeout(config, |signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and expects no meaningful response body.
pub async fn post_json<B: Serialize>(config: &AppConfig, path: &str, body: &B) -> Result<(), AppError> {
    let url = config.endpoint(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(config, move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts a pre-encoded body and decodes the JSON reply whatever the status,
/// returning the status alongside it.
pub async fn post_encoded<T: DeserializeOwned>(
    config: &AppConfig,
    path: &str,
    content_type: &str,
    body: String,
    headers: &[(&str, &str)],
) -> Result<(u16, T), AppError> {
    let url = config.endpoint(path);
    let response = send_with_timeout(config, move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", content_type)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        builder
            .body(body)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    let reply = response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
    Ok((status, reply))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    config: &AppConfig,
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let millis = u32::try_from(config.request_timeout.as_millis()).unwrap_or(u32::MAX);
    let _timeout = Timeout::new(millis, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response(status, &body)
}
