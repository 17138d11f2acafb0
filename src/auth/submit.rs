//! Submission handlers for the two screens.
//!
//! Every failure ends here: it is logged, shown through the [`Notifier`] and
//! returned as a [`SubmitOutcome`]. Nothing is retried and nothing is rolled
//! back. Success is never notified; the session change drives the redirect.

use super::notify::{Notifier, Severity};
use super::provider::{AccountService, IdentityProvider, SignInRequest, SignUpRequest};
use crate::forms::{Credentials, FormController, RegistrationData, SubmitError};
use tracing::{debug, error, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The provider accepted the credentials; the session will follow.
    SignedIn,
    /// The provider answered with a rejection reason.
    Rejected(String),
    /// The sign-in call itself failed.
    Failed(String),
    /// The account service refused to create the account; no sign-in was tried.
    AccountNotCreated(String),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SubmitOutcome::SignedIn)
    }

    /// The message that was shown to the user, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::SignedIn => None,
            SubmitOutcome::Rejected(message)
            | SubmitOutcome::Failed(message)
            | SubmitOutcome::AccountNotCreated(message) => Some(message),
        }
    }
}

/// Signs in without provider-side navigation.
pub async fn submit_login<I, N>(
    identity: &I,
    notifier: &N,
    method: &str,
    credentials: &Credentials,
) -> SubmitOutcome
where
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    let request = SignInRequest::without_redirect(credentials);
    debug!(method, "signing in");

    match identity.sign_in(method, &request).await {
        Ok(response) => match response.rejection() {
            Some(reason) => {
                warn!(status = response.status, "sign-in rejected: {reason}");
                notifier.notify(reason, Severity::Error);
                SubmitOutcome::Rejected(reason.to_string())
            }
            None => {
                debug!(status = response.status, "sign-in accepted");
                SubmitOutcome::SignedIn
            }
        },
        Err(err) => {
            let message = err.describe();
            error!("sign-in failed: {err}");
            notifier.notify(&message, Severity::Error);
            SubmitOutcome::Failed(message)
        }
    }
}

/// Creates the account and then signs in with the same email and password.
///
/// When the sign-in fails the account is left in place.
pub async fn submit_registration<A, I, N>(
    accounts: &A,
    identity: &I,
    notifier: &N,
    method: &str,
    data: &RegistrationData,
) -> SubmitOutcome
where
    A: AccountService + ?Sized,
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    debug!("creating account");
    if let Err(err) = accounts.sign_up(&SignUpRequest::from(data)).await {
        let message = err.describe();
        error!("account creation failed: {err}");
        notifier.notify(&message, Severity::Error);
        return SubmitOutcome::AccountNotCreated(message);
    }

    submit_login(identity, notifier, method, &data.credentials()).await
}

/// Runs the login form's submit: validation, in-flight gating, then
/// [`submit_login`].
///
/// # Errors
/// Returns the [`SubmitError`] when the form refuses to submit; no call is made.
pub async fn submit_login_form<I, N>(
    form: &mut FormController,
    identity: &I,
    notifier: &N,
    method: &str,
) -> Result<SubmitOutcome, SubmitError>
where
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    let values = form.begin_submit()?;
    let outcome = submit_login(identity, notifier, method, &Credentials::from_values(&values)).await;
    form.finish_submit();
    Ok(outcome)
}

/// Runs the registration form's submit, see [`submit_login_form`].
///
/// # Errors
/// Returns the [`SubmitError`] when the form refuses to submit; no call is made.
pub async fn submit_registration_form<A, I, N>(
    form: &mut FormController,
    accounts: &A,
    identity: &I,
    notifier: &N,
    method: &str,
) -> Result<SubmitOutcome, SubmitError>
where
    A: AccountService + ?Sized,
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    let values = form.begin_submit()?;
    let data = RegistrationData::from_values(&values);
    let outcome = submit_registration(accounts, identity, notifier, method, &data).await;
    form.finish_submit();
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provider::SignInResponse;
    use crate::errors::AppError;
    use crate::forms::{Field, login, register};
    use secrecy::ExposeSecret;
    use std::cell::RefCell;

    type Reply<T> = Result<T, AppError>;

    struct FakeIdentity {
        reply: Reply<SignInResponse>,
        calls: RefCell<Vec<(String, String, String, bool)>>,
    }

    impl FakeIdentity {
        fn replying(reply: Reply<SignInResponse>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn accepting() -> Self {
            Self::replying(Ok(SignInResponse {
                error: None,
                status: 200,
                ok: true,
                url: Some("/".to_string()),
            }))
        }
    }

    impl IdentityProvider for FakeIdentity {
        async fn sign_in(&self, method: &str, request: &SignInRequest) -> Result<SignInResponse, AppError> {
            self.calls.borrow_mut().push((
                method.to_string(),
                request.email.clone(),
                request.password.expose_secret().to_string(),
                request.redirect,
            ));
            self.reply.clone()
        }
    }

    struct FakeAccounts {
        reply: Reply<()>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeAccounts {
        fn replying(reply: Reply<()>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AccountService for FakeAccounts {
        async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError> {
            self.calls.borrow_mut().push(request.email.clone());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.messages.borrow_mut().push((message.to_string(), severity));
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("shopper@example.com", "hunter22")
    }

    fn registration() -> RegistrationData {
        let mut form = register::form();
        form.set_value(Field::Name, "shopper");
        form.set_value(Field::Email, "shopper@example.com");
        form.set_value(Field::Password, "hunter22");
        form.set_value(Field::ConfirmPassword, "hunter22");
        RegistrationData::from_values(form.values())
    }

    #[tokio::test]
    async fn accepted_login_is_silent() {
        let identity = FakeIdentity::accepting();
        let notifier = RecordingNotifier::default();

        let outcome = submit_login(&identity, &notifier, "credentials", &credentials()).await;

        assert_eq!(outcome, SubmitOutcome::SignedIn);
        assert!(notifier.messages.borrow().is_empty());
        assert_eq!(
            *identity.calls.borrow(),
            vec![(
                "credentials".to_string(),
                "shopper@example.com".to_string(),
                "hunter22".to_string(),
                false
            )]
        );
    }

    #[tokio::test]
    async fn rejected_login_shows_the_provider_reason() {
        let identity = FakeIdentity::replying(Ok(SignInResponse {
            error: Some("Invalid credentials".to_string()),
            status: 401,
            ok: false,
            url: None,
        }));
        let notifier = RecordingNotifier::default();

        let outcome = submit_login(&identity, &notifier, "credentials", &credentials()).await;

        assert_eq!(outcome, SubmitOutcome::Rejected("Invalid credentials".to_string()));
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("Invalid credentials".to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn failed_login_call_is_described() {
        let identity = FakeIdentity::replying(Err(AppError::Timeout("request timed out".to_string())));
        let notifier = RecordingNotifier::default();

        let outcome = submit_login(&identity, &notifier, "credentials", &credentials()).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Timeout: request timed out".to_string()));
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn registration_signs_in_with_the_same_credentials() {
        let accounts = FakeAccounts::replying(Ok(()));
        let identity = FakeIdentity::accepting();
        let notifier = RecordingNotifier::default();

        let outcome =
            submit_registration(&accounts, &identity, &notifier, "credentials", &registration()).await;

        assert!(outcome.is_signed_in());
        assert_eq!(*accounts.calls.borrow(), vec!["shopper@example.com".to_string()]);
        let calls = identity.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "shopper@example.com");
        assert_eq!(calls[0].2, "hunter22");
    }

    #[tokio::test]
    async fn refused_account_skips_sign_in() {
        let accounts = FakeAccounts::replying(Err(AppError::Http {
            status: 422,
            message: "User exists already!".to_string(),
        }));
        let identity = FakeIdentity::accepting();
        let notifier = RecordingNotifier::default();

        let outcome =
            submit_registration(&accounts, &identity, &notifier, "credentials", &registration()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::AccountNotCreated("User exists already!".to_string())
        );
        assert!(identity.calls.borrow().is_empty());
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("User exists already!".to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn sign_in_failure_after_sign_up_keeps_the_account() {
        let accounts = FakeAccounts::replying(Ok(()));
        let identity = FakeIdentity::replying(Ok(SignInResponse {
            error: Some("Service unavailable".to_string()),
            status: 503,
            ok: false,
            url: None,
        }));
        let notifier = RecordingNotifier::default();

        let outcome =
            submit_registration(&accounts, &identity, &notifier, "credentials", &registration()).await;

        assert_eq!(outcome.message(), Some("Service unavailable"));
        assert_eq!(accounts.calls.borrow().len(), 1);
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_provider_after_sign_up_keeps_the_account() {
        let accounts = FakeAccounts::replying(Ok(()));
        let identity =
            FakeIdentity::replying(Err(AppError::Network("connection reset".to_string())));
        let notifier = RecordingNotifier::default();

        let outcome =
            submit_registration(&accounts, &identity, &notifier, "credentials", &registration()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Network error: connection reset".to_string())
        );
        assert_eq!(*accounts.calls.borrow(), vec!["shopper@example.com".to_string()]);
        assert_eq!(identity.calls.borrow().len(), 1);
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("Network error: connection reset".to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn invalid_form_makes_no_calls() {
        let identity = FakeIdentity::accepting();
        let notifier = RecordingNotifier::default();
        let mut form = login::form();
        form.set_value(Field::Email, "shopper@example.com");
        form.set_value(Field::Password, "abc");

        let result = submit_login_form(&mut form, &identity, &notifier, "credentials").await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(identity.calls.borrow().is_empty());
        assert!(notifier.messages.borrow().is_empty());
        assert_eq!(form.error(Field::Password), Some(login::PASSWORD_TOO_SHORT));
    }

    #[tokio::test]
    async fn form_submit_releases_the_gate_and_keeps_values() {
        let identity = FakeIdentity::replying(Ok(SignInResponse {
            error: Some("Invalid credentials".to_string()),
            status: 401,
            ok: false,
            url: None,
        }));
        let notifier = RecordingNotifier::default();
        let mut form = login::form();
        form.set_value(Field::Email, "shopper@example.com");
        form.set_value(Field::Password, "hunter22");

        let outcome = submit_login_form(&mut form, &identity, &notifier, "credentials")
            .await
            .expect("valid form");

        assert!(!outcome.is_signed_in());
        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Email), "shopper@example.com");
    }

    #[tokio::test]
    async fn registration_form_checks_confirmation_before_any_call() {
        let accounts = FakeAccounts::replying(Ok(()));
        let identity = FakeIdentity::accepting();
        let notifier = RecordingNotifier::default();
        let mut form = register::form();
        form.set_value(Field::Name, "shopper");
        form.set_value(Field::Email, "shopper@example.com");
        form.set_value(Field::Password, "hunter22");
        form.set_value(Field::ConfirmPassword, "hunter23");

        let result =
            submit_registration_form(&mut form, &accounts, &identity, &notifier, "credentials").await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(accounts.calls.borrow().is_empty());
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some(register::PASSWORDS_MUST_MATCH)
        );
    }
}
