//! Post-authentication destination read from the `redirect` query parameter.
//!
//! The value is followed as given. Only the first `redirect` parameter counts
//! and an empty value behaves like an absent one.

use std::fmt;
use url::form_urlencoded;

pub const REDIRECT_PARAM: &str = "redirect";
pub const DEFAULT_REDIRECT: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RedirectTarget(String);

impl Default for RedirectTarget {
    fn default() -> Self {
        Self(DEFAULT_REDIRECT.to_string())
    }
}

impl RedirectTarget {
    #[must_use]
    pub fn new(target: Option<&str>) -> Self {
        match target {
            Some(path) if !path.is_empty() => Self(path.to_string()),
            _ => Self::default(),
        }
    }

    /// Reads the target from a query string, with or without the leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let target = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == REDIRECT_PARAM)
            .map(|(_, value)| value.into_owned());

        Self::new(target.as_deref())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_REDIRECT
    }

    /// Link to the login screen that preserves this target.
    #[must_use]
    pub fn login_href(&self) -> String {
        self.href(LOGIN_PATH)
    }

    /// Link to the registration screen that preserves this target.
    #[must_use]
    pub fn register_href(&self) -> String {
        self.href(REGISTER_PATH)
    }

    fn href(&self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(REDIRECT_PARAM, &self.0)
            .finish();
        format!("{path}?{query}")
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_target_defaults_to_root() {
        assert_eq!(RedirectTarget::from_query("").as_str(), "/");
        assert_eq!(RedirectTarget::from_query("?other=1").as_str(), "/");
        assert_eq!(RedirectTarget::from_query("?redirect=").as_str(), "/");
        assert_eq!(RedirectTarget::new(None), RedirectTarget::default());
        assert!(RedirectTarget::new(Some("")).is_default());
    }

    #[test]
    fn first_redirect_value_wins() {
        let target = RedirectTarget::from_query("?redirect=/shipping&redirect=/cart");
        assert_eq!(target.as_str(), "/shipping");
    }

    #[test]
    fn encoded_targets_are_decoded() {
        let target = RedirectTarget::from_query("redirect=%2Forder%3Fid%3D7");
        assert_eq!(target.as_str(), "/order?id=7");
    }

    #[test]
    fn cross_links_round_trip_the_target() {
        let target = RedirectTarget::new(Some("/order?id=7"));
        let href = target.register_href();
        assert!(href.starts_with("/register?redirect="));

        let (_, query) = href.split_once('?').expect("query present");
        assert_eq!(RedirectTarget::from_query(query), target);
        assert_eq!(RedirectTarget::default().login_href(), "/login?redirect=%2F");
    }

    #[test]
    fn targets_are_followed_as_given() {
        let target = RedirectTarget::from_query("redirect=https%3A%2F%2Felsewhere.example");
        assert_eq!(target.to_string(), "https://elsewhere.example");
    }
}
