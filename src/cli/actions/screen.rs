//! What both subcommands share: a session handle, the identity provider and
//! the redirect guard for one screen visit.

use crate::AppConfig;
use crate::auth::{RedirectGuard, RedirectTarget, Session, SessionHandle, SubmitOutcome};
use crate::cli::globals::GlobalArgs;
use crate::cli::terminal::{TerminalNavigator, print_field_errors};
use crate::client::HttpIdentityProvider;
use crate::forms::{FormController, SubmitError};
use anyhow::{Result, bail};
use tracing::debug;

pub(super) struct Screen {
    pub config: AppConfig,
    pub identity: HttpIdentityProvider,
    session: SessionHandle,
    target: RedirectTarget,
    guard: RedirectGuard,
}

impl Screen {
    /// Builds the adapters and reads any session the provider already has.
    pub async fn mount(globals: &GlobalArgs, redirect: Option<&str>) -> Result<Self> {
        let config = globals.config();
        let session = SessionHandle::new(Session::anonymous());
        let identity = HttpIdentityProvider::new(&config, session.clone())?;

        // Every run starts with an empty cookie jar, so this only finds a user
        // on a backend that authenticates without cookies.
        if let Err(err) = identity.refresh_session().await {
            debug!("no session on mount: {err}");
        }

        Ok(Self {
            config,
            identity,
            session,
            target: RedirectTarget::new(redirect),
            guard: RedirectGuard::new(),
        })
    }

    /// Runs the guard against the mounted session. `true` means the screen was
    /// left and nothing should be submitted.
    pub fn leave_if_signed_in(&mut self) -> bool {
        self.guard
            .evaluate(&self.session.snapshot(), &self.target, &TerminalNavigator)
    }

    /// Waits for the guard to react to the submission.
    pub async fn finish(self, submitted: Result<SubmitOutcome, SubmitError>, form: &FormController) -> Result<()> {
        let outcome = match submitted {
            Ok(outcome) => outcome,
            Err(SubmitError::Invalid(errors)) => {
                print_field_errors(form);
                bail!("{} invalid field(s)", errors.len());
            }
            Err(err) => return Err(err.into()),
        };

        let Self {
            identity,
            session,
            target,
            mut guard,
            ..
        } = self;
        let sessions = session.subscribe();
        drop(identity);
        drop(session);

        if guard.watch(sessions, &target, &TerminalNavigator).await {
            return Ok(());
        }

        // The notifier already printed the reason.
        bail!("{}", failure_summary(&outcome))
    }
}

fn failure_summary(outcome: &SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::SignedIn => "signed in but no session was established",
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => "sign-in did not complete",
        SubmitOutcome::AccountNotCreated(_) => "account was not created",
    }
}
