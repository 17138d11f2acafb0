use super::screen::Screen;
use crate::auth::submit_login_form;
use crate::cli::globals::GlobalArgs;
use crate::cli::terminal::TerminalNotifier;
use crate::forms::{Field, login};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
    pub redirect: Option<String>,
}

/// Drives the login screen once.
/// # Errors
/// Returns an error if the form is invalid, the sign-in fails, or no session follows.
pub async fn execute(args: Args) -> Result<()> {
    let mut screen = Screen::mount(&args.globals, args.redirect.as_deref()).await?;
    if screen.leave_if_signed_in() {
        return Ok(());
    }

    let mut form = login::form();
    form.set_value(Field::Email, args.email);
    form.set_value(Field::Password, args.password.expose_secret());

    let submitted = submit_login_form(
        &mut form,
        &screen.identity,
        &TerminalNotifier,
        &screen.config.sign_in_method,
    )
    .await;

    screen.finish(submitted, &form).await
}
