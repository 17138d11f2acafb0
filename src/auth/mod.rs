//! Auth feature covering the submission handlers, the session redirect guard,
//! and the notification channel. It never owns the session: the identity
//! provider creates and destroys it and this module only reacts to it. Nothing
//! here may log passwords.
//!
//! Flow Overview: the guard runs first and leaves the screen when a user is
//! already present. Otherwise a valid submit signs in (login) or creates the
//! account and then signs in (registration); failures become notifications and
//! a successful sign-in shows up as a session change that fires the guard.

pub mod guard;
pub mod notify;
pub mod provider;
pub mod redirect;
pub mod session;
pub mod submit;

pub use guard::{GuardState, Navigator, RedirectGuard};
pub use notify::{DisplayPolicy, Notifier, Severity, Toast, ToastQueue};
pub use provider::{AccountService, IdentityProvider, SignInRequest, SignInResponse, SignUpRequest};
pub use redirect::RedirectTarget;
pub use session::{Session, SessionHandle, SessionUser};
pub use submit::{SubmitOutcome, submit_login, submit_login_form, submit_registration, submit_registration_form};
