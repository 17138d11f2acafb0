use super::screen::Screen;
use crate::auth::submit_registration_form;
use crate::cli::globals::GlobalArgs;
use crate::cli::terminal::TerminalNotifier;
use crate::client::HttpAccountService;
use crate::forms::{Field, register};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub redirect: Option<String>,
}

/// Drives the registration screen once.
/// # Errors
/// Returns an error if the form is invalid, the account cannot be created, the
/// sign-in fails, or no session follows.
pub async fn execute(args: Args) -> Result<()> {
    let mut screen = Screen::mount(&args.globals, args.redirect.as_deref()).await?;
    if screen.leave_if_signed_in() {
        return Ok(());
    }

    let mut form = register::form();
    form.set_value(Field::Name, args.name);
    form.set_value(Field::Email, args.email);
    form.set_value(Field::Password, args.password.expose_secret());
    form.set_value(Field::ConfirmPassword, args.confirm_password.expose_secret());

    let accounts = HttpAccountService::new(&screen.config)?;
    let submitted = submit_registration_form(
        &mut form,
        &accounts,
        &screen.identity,
        &TerminalNotifier,
        &screen.config.sign_in_method,
    )
    .await;

    screen.finish(submitted, &form).await
}
