use super::login::{ARG_EMAIL, password_arg, redirect_arg};
use clap::{Arg, Command};

pub const NAME: &str = "register";
pub const ARG_NAME: &str = "name";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Create an account, then sign in with it")
        .arg(
            Arg::new(ARG_NAME)
                .long(ARG_NAME)
                .help("Username")
                .required(true),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .long(ARG_EMAIL)
                .help("Account email")
                .env("STOREFRONT_EMAIL")
                .required(true),
        )
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password again")
                .env("STOREFRONT_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(redirect_arg())
}
