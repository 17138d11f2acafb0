//! Identity provider and account service over `fetch`. Requests include
//! cookies so the provider's CSRF and session cookies are sent back.

use crate::app_lib::{
    AppError,
    api::{get_json, post_encoded, post_json},
};
use crate::features::auth::state::AuthContext;
use storefront_auth::AppConfig;
use storefront_auth::auth::provider::{
    AccountService, CSRF_PATH, CallbackReply, CsrfToken, FORM_CONTENT_TYPE, IdentityProvider,
    RETURN_REDIRECT_HEADER, SESSION_PATH, SIGN_UP_PATH, SignInRequest, SignInResponse, SignUpRequest,
    callback_path,
};
use storefront_auth::auth::Session;

/// Reads the current session; `{}` or `null` means nobody is signed in.
pub async fn fetch_session(config: &AppConfig) -> Result<Session, AppError> {
    let session: Option<Session> = get_json(config, SESSION_PATH).await?;
    Ok(session.unwrap_or_default())
}

#[derive(Clone)]
pub struct BrowserIdentityProvider {
    config: AppConfig,
    auth: AuthContext,
}

impl BrowserIdentityProvider {
    pub fn new(config: AppConfig, auth: AuthContext) -> Self {
        Self { config, auth }
    }
}

impl IdentityProvider for BrowserIdentityProvider {
    async fn sign_in(&self, method: &str, request: &SignInRequest) -> Result<SignInResponse, AppError> {
        let csrf: CsrfToken = get_json(&self.config, CSRF_PATH).await?;
        let body = request.callback_body(&csrf.csrf_token, &current_href(&self.config));

        let (status, reply): (u16, CallbackReply) = post_encoded(
            &self.config,
            &callback_path(method),
            FORM_CONTENT_TYPE,
            body,
            &[(RETURN_REDIRECT_HEADER, "1")],
        )
        .await?;

        let result = SignInResponse::from_callback(status, reply);
        if result.ok {
            // A failed read leaves the guard waiting; the form stays usable.
            if let Ok(session) = fetch_session(&self.config).await {
                self.auth.publish(session);
            }
        }
        Ok(result)
    }
}

#[derive(Clone)]
pub struct BrowserAccountService {
    config: AppConfig,
}

impl BrowserAccountService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl AccountService for BrowserAccountService {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError> {
        post_json(&self.config, SIGN_UP_PATH, request).await
    }
}

/// The page the provider should consider the sign-in origin.
fn current_href(config: &AppConfig) -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_else(|| config.endpoint("/"))
}
