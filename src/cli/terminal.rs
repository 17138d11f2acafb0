//! Terminal stand-ins for the browser's toast host and router.

use crate::auth::{Navigator, Notifier, Severity};
use crate::forms::FormController;

/// Prints notifications to stderr as `<severity>: <message>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("{severity}: {message}");
    }
}

/// Prints the navigation decision to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        println!("redirect: {path}");
    }
}

/// One line per visible field error, in form order.
pub fn print_field_errors(form: &FormController) {
    for (field, message) in form.visible_errors() {
        eprintln!("{}: {message}", field.label());
    }
}
