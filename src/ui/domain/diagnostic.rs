//! Diagnostic records and the result-plus-diagnostics pair.

use std::fmt;

use crate::ui::error::BuildError;

/// What the pipeline did about a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The offending value was replaced by a default.
    AutoCorrected,
    /// The offending value was applied unchanged.
    PassedThrough,
    /// A required value is absent and nothing could replace it.
    Unresolved,
    /// The unit that failed was left out of the result.
    Skipped,
    /// The whole result was replaced by a canned fallback.
    FallbackSubstituted,
}

impl Resolution {
    /// Returns `true` when the finding left a gap in the result.
    #[must_use]
    pub const fn is_lossy(self) -> bool {
        matches!(
            self,
            Self::Unresolved | Self::Skipped | Self::FallbackSubstituted
        )
    }
}

/// A non-fatal finding destined for the diagnostic reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The underlying cause.
    pub error: BuildError,
    /// Human-readable context for the log.
    pub context: String,
    /// How the finding was handled.
    pub resolution: Resolution,
}

impl Diagnostic {
    /// Creates a diagnostic record.
    #[must_use]
    pub fn new(error: BuildError, context: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            error,
            context: context.into(),
            resolution,
        }
    }

    /// Creates a diagnostic for a value replaced by its default.
    #[must_use]
    pub fn auto_corrected(error: BuildError, context: impl Into<String>) -> Self {
        Self::new(error, context, Resolution::AutoCorrected)
    }

    /// Creates a diagnostic for a value applied despite the violation.
    #[must_use]
    pub fn passed_through(error: BuildError, context: impl Into<String>) -> Self {
        Self::new(error, context, Resolution::PassedThrough)
    }

    /// Creates a diagnostic for an absent required value.
    #[must_use]
    pub fn unresolved(error: BuildError, context: impl Into<String>) -> Self {
        Self::new(error, context, Resolution::Unresolved)
    }

    /// Creates a diagnostic for a unit dropped from the result.
    #[must_use]
    pub fn skipped(error: BuildError, context: impl Into<String>) -> Self {
        Self::new(error, context, Resolution::Skipped)
    }

    /// Creates a diagnostic for a result replaced by a fallback.
    #[must_use]
    pub fn fallback(error: BuildError, context: impl Into<String>) -> Self {
        Self::new(error, context, Resolution::FallbackSubstituted)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

/// A built value together with every finding raised while building it.
///
/// # Examples
///
/// ```
/// use chatform::ui::domain::Validated;
///
/// let validated = Validated::new(42);
/// assert!(validated.is_clean());
/// assert_eq!(validated.value, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    /// The value, built best-effort.
    pub value: T,
    /// Findings in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    /// Wraps a value that raised no findings.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Wraps a value together with its findings.
    #[must_use]
    pub const fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Returns `true` when no findings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns `true` when any finding left a gap in the value.
    #[must_use]
    pub fn is_lossy(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.resolution.is_lossy())
    }

    /// Splits into the value and its findings.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    /// Maps the value, keeping the findings.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        Validated {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}
