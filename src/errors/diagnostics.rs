use log::warn;

use super::errors::Error;

/// Receives the non-fatal problems the lexer runs into while scanning.
///
/// Reporting never interrupts a scan: the lexer keeps producing tokens after
/// handing an [`Error`] to its sink.
pub trait Diagnostics {
    fn report(&mut self, error: Error);
}

impl Diagnostics for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, error: Error) {
        (**self).report(error);
    }
}

/// Forwards every diagnostic to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, error: Error) {
        warn!("{}: {}", error.get_error_name(), error);
    }
}
