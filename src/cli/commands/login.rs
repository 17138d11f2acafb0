use clap::{Arg, Command};

pub const NAME: &str = "login";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_REDIRECT: &str = "redirect";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Sign in with email and password")
        .arg(
            Arg::new(ARG_EMAIL)
                .long(ARG_EMAIL)
                .help("Account email")
                .env("STOREFRONT_EMAIL")
                .required(true),
        )
        .arg(password_arg())
        .arg(redirect_arg())
}

pub(super) fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("STOREFRONT_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

pub(super) fn redirect_arg() -> Arg {
    Arg::new(ARG_REDIRECT)
        .long(ARG_REDIRECT)
        .help("Path to open once signed in (default: /)")
}
