//! Diagnostic reporter port.
//!
//! The reporter is the application's logging sink for [`Diagnostic`]
//! records. Callers never let a reporter failure escape: it is written to the
//! fallback log and dropped.

use thiserror::Error;

use crate::ui::domain::Diagnostic;

/// Result type for reporter operations.
pub type ReporterResult<T> = Result<T, ReporterError>;

/// Port for durable diagnostic logging.
pub trait DiagnosticReporter: Send + Sync {
    /// Records one diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ReporterError`] when the sink cannot accept the record.
    fn report(&self, diagnostic: &Diagnostic) -> ReporterResult<()>;
}

/// Errors for diagnostic reporter operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReporterError {
    /// The sink is not accepting records.
    #[error("diagnostic sink unavailable: {0}")]
    Unavailable(String),
}
