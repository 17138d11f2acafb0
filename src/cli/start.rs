use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Level for the sign-in flow and HTTP adapter events. `None` keeps the
/// telemetry default of errors only; hyper stays at error regardless.
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parses the command line, installs logging and picks the screen to drive.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the subcommand's
/// arguments cannot be mapped to a screen.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = get_verbosity_level(
        matches
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );

    telemetry::init(verbosity_level)?;

    dispatch::handler(&matches)
}
