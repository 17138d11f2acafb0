//! Account creation against `POST /api/auth/signup`.

use super::{handle_empty_response, http_client, map_request_error};
use crate::auth::provider::{AccountService, SIGN_UP_PATH, SignUpRequest};
use crate::{AppConfig, AppError};
use reqwest::Client;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct HttpAccountService {
    client: Client,
    config: AppConfig,
}

impl HttpAccountService {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: http_client(config)?,
            config: config.clone(),
        })
    }
}

impl AccountService for HttpAccountService {
    #[instrument(skip_all, fields(email = %request.email))]
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError> {
        let url = self.config.endpoint(SIGN_UP_PATH);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| map_request_error(&err))?;

        handle_empty_response(response).await
    }
}
