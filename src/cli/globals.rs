use crate::config::{AppConfig, ConfigOverrides};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub base_url: String,
    pub sign_in_method: String,
    pub timeout_seconds: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            sign_in_method: crate::config::DEFAULT_SIGN_IN_METHOD.to_string(),
            timeout_seconds: crate::config::DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }

    #[must_use]
    pub fn config(&self) -> AppConfig {
        AppConfig::default().with_overrides(ConfigOverrides {
            base_url: Some(self.base_url.clone()),
            sign_in_method: Some(self.sign_in_method.clone()),
            request_timeout_ms: Some(self.timeout_seconds.saturating_mul(1_000)),
            ..ConfigOverrides::default()
        })
    }
}
