//! Error types for the diagnostic slash command.

use thiserror::Error;

/// Errors raised while defining or executing a slash command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Command name breaks the platform's naming rule.
    #[error("invalid command name '{0}': expected 1-32 lowercase letters, digits, '-' or '_'")]
    InvalidCommandName(String),

    /// Command description is empty or too long.
    #[error("invalid description for command '/{command}': {reason}")]
    InvalidDescription {
        /// Command name.
        command: String,
        /// Validation reason.
        reason: String,
    },

    /// Reply template rendering failed.
    #[error("template rendering failed for command '/{command}': {reason}")]
    TemplateRender {
        /// Command name.
        command: String,
        /// Rendering failure reason.
        reason: String,
    },

    /// The platform refused the reply.
    #[error("reply failed: {0}")]
    Reply(#[from] ResponderError),
}

/// Errors returned by an [`InteractionResponder`](super::ports::InteractionResponder).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponderError {
    /// The interaction was already answered or has expired.
    #[error("interaction can no longer be answered: {0}")]
    InteractionClosed(String),

    /// The platform rejected the reply.
    #[error("platform rejected the reply: {0}")]
    Rejected(String),
}

/// Failure reported by a [`DiagnosticProbe`](super::ports::DiagnosticProbe).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("probe '{probe}' failed: {reason}")]
pub struct ProbeError {
    /// Display name of the probe.
    pub probe: String,
    /// Failure reason.
    pub reason: String,
}

impl ProbeError {
    /// Creates a probe failure.
    #[must_use]
    pub fn new(probe: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            probe: probe.into(),
            reason: reason.into(),
        }
    }
}
