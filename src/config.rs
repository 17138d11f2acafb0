//! Endpoint and behavior settings shared by every front end. Hosts build an
//! [`AppConfig`] from their own sources (CLI flags and environment for the
//! terminal, build-time variables plus `window.STOREFRONT_CONFIG` for the
//! browser) and apply them as [`ConfigOverrides`]. Values are public; do not
//! store secrets here.

use crate::auth::notify::DisplayPolicy;
use std::time::Duration;

/// Sign-in method used unless configured otherwise.
pub const DEFAULT_SIGN_IN_METHOD: &str = "credentials";
/// Default request timeout applied by the HTTP adapters.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);
/// How long a toast stays visible before the host dismisses it.
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(5_000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the identity provider and account service. Empty means same origin.
    pub base_url: String,
    pub sign_in_method: String,
    pub request_timeout: Duration,
    pub toast_timeout: Duration,
    pub display_policy: DisplayPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            sign_in_method: DEFAULT_SIGN_IN_METHOD.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            toast_timeout: DEFAULT_TOAST_TIMEOUT,
            display_policy: DisplayPolicy::Single,
        }
    }
}

impl AppConfig {
    /// Applies overrides on top of the current values. Blank strings and zero
    /// durations are ignored.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(value) = overrides.base_url.as_deref().and_then(normalize_value) {
            self.base_url = value;
        }
        if let Some(value) = overrides
            .sign_in_method
            .as_deref()
            .and_then(normalize_value)
        {
            self.sign_in_method = value;
        }
        if let Some(millis) = overrides.request_timeout_ms.filter(|ms| *ms > 0) {
            self.request_timeout = Duration::from_millis(millis);
        }
        if let Some(millis) = overrides.toast_timeout_ms.filter(|ms| *ms > 0) {
            self.toast_timeout = Duration::from_millis(millis);
        }
        if let Some(policy) = overrides.display_policy {
            self.display_policy = policy;
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.apply_overrides(overrides);
        self
    }

    /// Joins the configured base URL and an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Optional values layered over [`AppConfig`] by a host.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub sign_in_method: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub toast_timeout_ms: Option<u64>,
    pub display_policy: Option<DisplayPolicy>,
}

/// Trims a raw setting and rejects blank values.
#[must_use]
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
