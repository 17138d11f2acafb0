//! # storefront-auth (login and registration screens)
//!
//! Headless core of the storefront's two authentication screens. Each screen
//! renders a validated form, submits credentials to the identity provider, and
//! leaves the screen once a session exists.
//!
//! ## Screen anatomy
//!
//! | Piece | Module | Purpose |
//! |-------|--------|---------|
//! | Form schema | [`forms::schema`] | Ordered rules per field, cross-field dependencies |
//! | Form controller | [`forms::controller`] | Values, errors, touched fields, submit gating |
//! | Submission handlers | [`auth::submit`] | Sign-in, sign-up then sign-in, outcome to notification |
//! | Redirect guard | [`auth::guard`] | One navigation once the session has a user |
//! | Notifications | [`auth::notify`] | Transient toasts with a display policy |
//!
//! The identity provider, the account service, navigation and the toast host
//! are collaborators behind the traits in [`auth::provider`], [`auth::guard`]
//! and [`auth::notify`]. The `cli` feature adds `reqwest` adapters for a
//! next-auth compatible backend ([`client`]) and a terminal front end
//! ([`cli`]).
//!
//! ## Registration is two calls
//!
//! Registration creates the account and then signs in. The two calls are not
//! atomic: when the sign-in fails the account still exists and the user is
//! told about the sign-in failure only.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;

pub use config::AppConfig;
pub use errors::AppError;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
