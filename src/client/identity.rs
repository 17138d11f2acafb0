//! Credential sign-in against a next-auth compatible identity provider.
//!
//! A sign-in is three calls: fetch a CSRF token (which also sets the CSRF
//! cookie), post the credentials to the provider callback, and on success read
//! the session back and publish it to the [`SessionHandle`].

use super::{decode_json, handle_json_response, http_client, map_request_error};
use crate::auth::provider::{
    CSRF_PATH, CallbackReply, CsrfToken, FORM_CONTENT_TYPE, IdentityProvider, RETURN_REDIRECT_HEADER,
    SESSION_PATH, SignInRequest, SignInResponse, callback_path,
};
use crate::auth::session::{Session, SessionHandle};
use crate::{AppConfig, AppError};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

#[derive(Clone, Debug)]
pub struct HttpIdentityProvider {
    client: Client,
    config: AppConfig,
    session: SessionHandle,
}

impl HttpIdentityProvider {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig, session: SessionHandle) -> Result<Self, AppError> {
        Ok(Self {
            client: http_client(config)?,
            config: config.clone(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Reads the current session. The provider answers `{}` (or `null`) when
    /// nobody is signed in.
    ///
    /// # Errors
    /// Returns an error if the call fails or the body is not a session.
    pub async fn fetch_session(&self) -> Result<Session, AppError> {
        let response = self
            .client
            .get(self.config.endpoint(SESSION_PATH))
            .send()
            .await
            .map_err(|err| map_request_error(&err))?;

        let session: Option<Session> = handle_json_response(response).await?;
        Ok(session.unwrap_or_default())
    }

    /// Fetches the session and publishes it to the handle.
    ///
    /// # Errors
    /// Returns an error if the session cannot be read; the handle is unchanged.
    pub async fn refresh_session(&self) -> Result<Session, AppError> {
        let session = self.fetch_session().await?;
        if self.session.publish(session.clone()) {
            debug!(authenticated = session.is_authenticated(), "session changed");
        }
        Ok(session)
    }

    async fn csrf_token(&self) -> Result<String, AppError> {
        let response = self
            .client
            .get(self.config.endpoint(CSRF_PATH))
            .send()
            .await
            .map_err(|err| map_request_error(&err))?;

        let csrf: CsrfToken = handle_json_response(response).await?;
        Ok(csrf.csrf_token)
    }
}

impl IdentityProvider for HttpIdentityProvider {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn sign_in(&self, method: &str, request: &SignInRequest) -> Result<SignInResponse, AppError> {
        let csrf_token = self.csrf_token().await?;
        let body = request.callback_body(&csrf_token, &self.config.endpoint("/"));

        let url = self.config.endpoint(&callback_path(method));
        debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .header(RETURN_REDIRECT_HEADER, "1")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| map_request_error(&err))?;

        let status = response.status().as_u16();
        let reply: CallbackReply = decode_json(response).await?;
        let result = SignInResponse::from_callback(status, reply);

        if result.ok {
            if let Err(err) = self.refresh_session().await {
                warn!("signed in but the session could not be read: {err}");
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SessionUser;
    use crate::client::tests::{can_bind_localhost, config_for};
    use anyhow::Result;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> SignInRequest {
        SignInRequest {
            email: "shopper@example.com".to_string(),
            password: SecretString::from("hunter22".to_string()),
            redirect: false,
        }
    }

    async fn mount_csrf(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/auth/csrf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "next-auth.csrf-token=tok%7Chash; Path=/")
                    .set_body_json(json!({"csrfToken": "tok"})),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn successful_sign_in_publishes_the_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_csrf(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/auth/callback/credentials"))
            .and(header("X-Auth-Return-Redirect", "1"))
            .and(body_string_contains("csrfToken=tok"))
            .and(body_string_contains("email=shopper%40example.com"))
            .and(body_string_contains("redirect=false"))
            .and(body_string_contains("json=true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": format!("{}/", server.uri())})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"name": "shopper", "email": "shopper@example.com"},
                "expires": "2026-11-14T00:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let session = SessionHandle::default();
        let mut changes = session.subscribe();
        let provider = HttpIdentityProvider::new(&config_for(&server.uri()), session.clone())?;

        let response = provider.sign_in("credentials", &request()).await?;

        assert!(response.ok);
        assert_eq!(response.error, None);
        assert_eq!(response.status, 200);
        assert!(changes.has_changed()?);
        assert_eq!(
            changes.borrow_and_update().user,
            Some(SessionUser {
                name: Some("shopper".to_string()),
                email: Some("shopper@example.com".to_string()),
                image: None,
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn rejected_sign_in_reports_the_error_and_keeps_the_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_csrf(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/auth/callback/credentials"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "url": format!("{}/api/auth/error?error=Invalid%20credentials", server.uri())
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let session = SessionHandle::default();
        let provider = HttpIdentityProvider::new(&config_for(&server.uri()), session.clone())?;

        let response = provider.sign_in("credentials", &request()).await?;

        assert!(!response.ok);
        assert_eq!(response.status, 401);
        assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(response.url, None);
        assert!(!session.snapshot().is_authenticated());
        Ok(())
    }

    #[tokio::test]
    async fn missing_csrf_endpoint_fails_the_call() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let provider = HttpIdentityProvider::new(&config_for(&server.uri()), SessionHandle::default())?;

        let err = provider
            .sign_in("credentials", &request())
            .await
            .expect_err("csrf lookup must fail");

        assert!(matches!(err, AppError::Http { status: 404, .. }));
        Ok(())
    }

    #[tokio::test]
    async fn empty_session_document_is_anonymous() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let provider = HttpIdentityProvider::new(&config_for(&server.uri()), SessionHandle::default())?;
        let session = provider.refresh_session().await?;

        assert_eq!(session, Session::anonymous());
        Ok(())
    }
}
