//! Forwarding diagnostics to a reporter.

use crate::ui::{domain::Diagnostic, ports::reporter::DiagnosticReporter};

/// Sends every diagnostic to the reporter, in order.
///
/// A reporter failure is written to the fallback log and otherwise ignored;
/// the remaining diagnostics are still sent.
pub fn report_all<R>(reporter: &R, diagnostics: &[Diagnostic])
where
    R: DiagnosticReporter + ?Sized,
{
    for diagnostic in diagnostics {
        if let Err(error) = reporter.report(diagnostic) {
            tracing::error!(
                %error,
                context = %diagnostic.context,
                cause = %diagnostic.error,
                "diagnostic reporter failed"
            );
        }
    }
}
