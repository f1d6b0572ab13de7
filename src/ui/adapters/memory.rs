//! In-memory diagnostic reporter.
//!
//! Provides a thread-safe collector for unit tests and for callers that want
//! to inspect diagnostics after a service call.

use std::sync::{Arc, RwLock};

use crate::ui::{
    domain::Diagnostic,
    ports::reporter::{DiagnosticReporter, ReporterError, ReporterResult},
};

/// In-memory implementation of [`DiagnosticReporter`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReporter {
    store: Arc<RwLock<Vec<Diagnostic>>>,
}

impl InMemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded diagnostic, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.store
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every recorded diagnostic.
    #[must_use]
    pub fn drain(&self) -> Vec<Diagnostic> {
        self.store
            .write()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl DiagnosticReporter for InMemoryReporter {
    fn report(&self, diagnostic: &Diagnostic) -> ReporterResult<()> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| ReporterError::Unavailable(e.to_string()))?;
        guard.push(diagnostic.clone());
        Ok(())
    }
}
