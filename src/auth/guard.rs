//! Leaves an auth screen once the session carries a user.
//!
//! The guard is a two-state machine: it starts unauthenticated and moves to
//! authenticated, navigating exactly once, the first time it observes a user.
//! It never moves back for the lifetime of the screen.

use super::redirect::RedirectTarget;
use super::session::Session;
use tokio::sync::watch;
use tracing::debug;

/// Host navigation. Implementations replace the current screen with `path`.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unauthenticated,
    Authenticated {
        target: RedirectTarget,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RedirectGuard {
    state: GuardState,
}

impl RedirectGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        matches!(self.state, GuardState::Authenticated { .. })
    }

    /// Checks one session snapshot. Returns `true` only on the call that
    /// navigates.
    pub fn evaluate<N: Navigator + ?Sized>(
        &mut self,
        session: &Session,
        target: &RedirectTarget,
        navigator: &N,
    ) -> bool {
        if self.has_fired() || !session.is_authenticated() {
            return false;
        }

        debug!(redirect = %target, "session present, leaving auth screen");
        navigator.navigate(target.as_str());
        self.state = GuardState::Authenticated {
            target: target.clone(),
        };
        true
    }

    /// Evaluates the current snapshot and then every change until the guard
    /// fires. Returns `false` when the session source closes first.
    pub async fn watch<N: Navigator + ?Sized>(
        &mut self,
        mut sessions: watch::Receiver<Session>,
        target: &RedirectTarget,
        navigator: &N,
    ) -> bool {
        loop {
            let session = sessions.borrow_and_update().clone();
            self.evaluate(&session, target, navigator);
            if self.has_fired() {
                return true;
            }
            if sessions.changed().await.is_err() {
                return false;
            }
        }
    }
}
