//! Maps validated CLI arguments to the screen to drive.

use crate::cli::actions::{Action, login, register};
use crate::cli::commands::{self, provider};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if a required argument is missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand: expected `login` or `register`");
    };

    let globals = provider::parse(sub)?;
    let redirect = sub.get_one::<String>(commands::login::ARG_REDIRECT).cloned();
    let email = required(sub, commands::login::ARG_EMAIL)?;
    let password = SecretString::from(required(sub, commands::login::ARG_PASSWORD)?);

    match name {
        commands::login::NAME => Ok(Action::Login(login::Args {
            globals,
            email,
            password,
            redirect,
        })),
        commands::register::NAME => Ok(Action::Register(register::Args {
            globals,
            name: required(sub, commands::register::ARG_NAME)?,
            email,
            password,
            confirm_password: SecretString::from(required(
                sub,
                commands::register::ARG_CONFIRM_PASSWORD,
            )?),
            redirect,
        })),
        other => bail!("unknown subcommand: {other}"),
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}
