//! Diagnostic slash command.
//!
//! Provides the `/test` command used to check that a single bot helper works
//! when invoked from the chat platform. Command registration and dispatch
//! belong to the application's framework; this module supplies the
//! definition and the handler.

mod definition;
mod error;
pub mod ports;
mod test_command;

pub use definition::CommandDefinition;
pub use error::{CommandError, ProbeError, ResponderError};
pub use ports::{DiagnosticProbe, InteractionResponder, Reply};
pub use test_command::{
    LOG_PROBE_NAME, LogProbe, TEST_COMMAND_DESCRIPTION, TEST_COMMAND_NAME, TestCommand,
    TestOutcome,
};
