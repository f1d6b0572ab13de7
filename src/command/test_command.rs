//! The `/test` diagnostic command.
//!
//! Runs one designated operation and tells the invoking user whether it
//! worked. The reply depends only on the probe's outcome.

use std::sync::Arc;

use minijinja::{Environment, context};

use super::{
    CommandDefinition, CommandError,
    error::ProbeError,
    ports::{DiagnosticProbe, InteractionResponder, Reply},
};

/// Name the command is registered under.
pub const TEST_COMMAND_NAME: &str = "test";
/// Description the command is registered with.
pub const TEST_COMMAND_DESCRIPTION: &str = "Test command";

const SUCCESS_TEMPLATE: &str = "✅ The Command Works! - Tested Function: **{{ function }}** ✅";
const FAILURE_TEMPLATE: &str = "❌ The Command Failed! - Tested Function: **{{ function }}** ❌";

/// Outcome of one `/test` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// The probe ran without error.
    Passed,
    /// The probe failed.
    Failed(ProbeError),
}

impl TestOutcome {
    /// Returns `true` when the probe succeeded.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Display name of the function exercised by [`LogProbe`].
pub const LOG_PROBE_NAME: &str = "cLog()";

/// Probe that writes a fixed line to the log through the `cLog()` helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogProbe {
    message: String,
}

impl LogProbe {
    /// Creates a probe logging `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for LogProbe {
    fn default() -> Self {
        Self::new("Testing!!!")
    }
}

impl DiagnosticProbe for LogProbe {
    fn name(&self) -> &str {
        LOG_PROBE_NAME
    }

    fn run(&self) -> Result<(), ProbeError> {
        tracing::info!(target: "chatform::probe", "{}", self.message);
        Ok(())
    }
}

/// The `/test` slash command.
#[derive(Debug, Clone)]
pub struct TestCommand<P>
where
    P: DiagnosticProbe,
{
    definition: CommandDefinition,
    probe: Arc<P>,
}

impl<P> TestCommand<P>
where
    P: DiagnosticProbe,
{
    /// Creates the command around a probe.
    #[must_use]
    pub fn new(probe: Arc<P>) -> Self {
        Self {
            definition: CommandDefinition::new(TEST_COMMAND_NAME, TEST_COMMAND_DESCRIPTION),
            probe,
        }
    }

    /// Returns the registration definition.
    #[must_use]
    pub const fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Runs the probe and replies with the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TemplateRender`] if a reply cannot be
    /// rendered and [`CommandError::Reply`] if the platform refuses it. A
    /// failing probe is not an error; it yields [`TestOutcome::Failed`].
    pub async fn execute<S>(&self, responder: &S) -> Result<TestOutcome, CommandError>
    where
        S: InteractionResponder + ?Sized,
    {
        let function = self.probe.name();
        let outcome = match self.probe.run() {
            Ok(()) => TestOutcome::Passed,
            Err(error) => TestOutcome::Failed(error),
        };

        let template = if outcome.is_passed() {
            SUCCESS_TEMPLATE
        } else {
            FAILURE_TEMPLATE
        };
        let content = self.render(template, function)?;
        let replied = responder.reply(&Reply::ephemeral(content)).await;

        match &outcome {
            TestOutcome::Passed => {
                tracing::info!(function, "test command executed successfully");
            }
            TestOutcome::Failed(error) => {
                tracing::warn!(function, %error, "test command failed to execute");
            }
        }
        if let Err(error) = &replied {
            tracing::error!(
                command = %self.definition.name,
                %error,
                "test command reply refused"
            );
        }
        tracing::info!(command = %self.definition.name, "test command complete");

        replied?;
        Ok(outcome)
    }

    fn render(&self, template: &str, function: &str) -> Result<String, CommandError> {
        Environment::new()
            .render_str(template, context! { function => function })
            .map_err(|error| CommandError::TemplateRender {
                command: self.definition.name.clone(),
                reason: error.to_string(),
            })
    }
}
