//! Diagnostic reporter backed by `tracing`.

use crate::ui::{
    domain::{Diagnostic, Resolution},
    ports::reporter::{DiagnosticReporter, ReporterResult},
};

/// Emits one `tracing` event per diagnostic.
///
/// Findings that left a gap in the result (unresolved, skipped, fallback)
/// are logged at `ERROR`; corrected or passed-through values at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Creates the reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticReporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic) -> ReporterResult<()> {
        let resolution = resolution_label(diagnostic.resolution);
        if diagnostic.resolution.is_lossy() {
            tracing::error!(
                error = %diagnostic.error,
                resolution,
                "{}",
                diagnostic.context
            );
        } else {
            tracing::warn!(
                error = %diagnostic.error,
                resolution,
                "{}",
                diagnostic.context
            );
        }
        Ok(())
    }
}

const fn resolution_label(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::AutoCorrected => "auto_corrected",
        Resolution::PassedThrough => "passed_through",
        Resolution::Unresolved => "unresolved",
        Resolution::Skipped => "skipped",
        Resolution::FallbackSubstituted => "fallback_substituted",
    }
}
