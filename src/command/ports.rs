//! Ports used by the diagnostic slash command.

use async_trait::async_trait;
use serde::Serialize;

use super::error::{ProbeError, ResponderError};

/// A reply to a slash-command interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Message text.
    pub content: String,
    /// Whether only the invoking user sees the reply.
    pub ephemeral: bool,
}

impl Reply {
    /// Creates a reply visible only to the invoking user.
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// Port for answering an interaction through the platform SDK.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Sends the reply.
    ///
    /// # Errors
    ///
    /// Returns [`ResponderError`] when the platform refuses the reply.
    async fn reply(&self, reply: &Reply) -> Result<(), ResponderError>;
}

/// The operation exercised by the diagnostic command.
pub trait DiagnosticProbe: Send + Sync {
    /// Display name of the exercised function, e.g. `cLog()`.
    fn name(&self) -> &str;

    /// Runs the operation once.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the operation fails.
    fn run(&self) -> Result<(), ProbeError>;
}
