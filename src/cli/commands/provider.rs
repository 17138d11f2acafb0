//! Where the identity provider and account service live.

use crate::cli::globals::GlobalArgs;
use crate::config::DEFAULT_SIGN_IN_METHOD;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_SIGN_IN_METHOD: &str = "sign-in-method";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .long(ARG_BASE_URL)
                .help("Storefront origin serving /api/auth")
                .env("STOREFRONT_BASE_URL")
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_SIGN_IN_METHOD)
                .long(ARG_SIGN_IN_METHOD)
                .help("Identity provider sign-in method")
                .env("STOREFRONT_SIGN_IN_METHOD")
                .default_value(DEFAULT_SIGN_IN_METHOD)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long(ARG_TIMEOUT_SECONDS)
                .help("Request timeout in seconds")
                .env("STOREFRONT_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
}

/// Reads the provider settings into [`GlobalArgs`].
///
/// # Errors
/// Returns an error if a defaulted argument is somehow missing.
pub fn parse(matches: &ArgMatches) -> Result<GlobalArgs> {
    let base_url = matches
        .get_one::<String>(ARG_BASE_URL)
        .cloned()
        .context("missing required argument: --base-url")?;
    let sign_in_method = matches
        .get_one::<String>(ARG_SIGN_IN_METHOD)
        .cloned()
        .context("missing required argument: --sign-in-method")?;
    let timeout_seconds = matches
        .get_one::<u64>(ARG_TIMEOUT_SECONDS)
        .copied()
        .context("missing required argument: --timeout-seconds")?;

    Ok(GlobalArgs {
        base_url,
        sign_in_method,
        timeout_seconds,
    })
}
