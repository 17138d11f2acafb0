pub mod login;
pub mod register;

mod run;
mod screen;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the form is invalid or no session was established.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
