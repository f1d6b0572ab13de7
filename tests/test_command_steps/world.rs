//! World state for test command BDD scenarios.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chatform::command::{
    CommandError, DiagnosticProbe, InteractionResponder, ProbeError, Reply, ResponderError,
    TestCommand, TestOutcome,
};
use rstest::fixture;

pub const PASSING_PROBE: &str = "cLog()";
pub const FAILING_PROBE: &str = "createModal()";

/// Probe whose outcome is fixed by the scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedProbe {
    pub fails: bool,
}

impl DiagnosticProbe for ScriptedProbe {
    fn name(&self) -> &str {
        if self.fails { FAILING_PROBE } else { PASSING_PROBE }
    }

    fn run(&self) -> Result<(), ProbeError> {
        if self.fails {
            return Err(ProbeError::new(FAILING_PROBE, "scripted failure"));
        }
        Ok(())
    }
}

/// Responder that records replies, or refuses them once expired.
#[derive(Debug, Default)]
pub struct RecordingResponder {
    pub expired: bool,
    pub(crate) replies: Mutex<Vec<Reply>>,
}

impl RecordingResponder {
    pub fn replies(&self) -> Vec<Reply> {
        self.replies
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn reply(&self, reply: &Reply) -> Result<(), ResponderError> {
        if self.expired {
            return Err(ResponderError::InteractionClosed(
                "interaction token expired".to_owned(),
            ));
        }
        self.replies
            .lock()
            .map_err(|e| ResponderError::Rejected(e.to_string()))?
            .push(reply.clone());
        Ok(())
    }
}

/// World state for test command BDD tests.
#[derive(Default)]
pub struct TestCommandWorld {
    pub command: Option<TestCommand<ScriptedProbe>>,
    pub responder: Arc<RecordingResponder>,
    pub result: Option<Result<TestOutcome, CommandError>>,
}

#[fixture]
pub fn world() -> TestCommandWorld {
    TestCommandWorld::default()
}

pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
