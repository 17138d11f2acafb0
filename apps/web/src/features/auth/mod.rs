//! Auth feature wiring for the browser: session context, the `fetch` based
//! identity provider and account service, and the redirect guard hook. The
//! screens' rules live in `storefront-auth`; nothing here may log credentials.
//!
//! Flow Overview: the provider reads `/api/auth/session` once on mount. A login
//! or registration submit signs in through the provider callback and, on
//! success, re-reads the session; the guard sees the user and navigates.

pub(crate) mod client;
mod guards;
pub(crate) mod state;

pub(crate) use guards::{use_redirect_guard, use_redirect_target};
