//! Given, when and then steps for test command scenarios.

use std::sync::Arc;

use chatform::command::{CommandError, ResponderError, TestCommand, TestOutcome};
use eyre::{Result, eyre};
use rstest_bdd_macros::{given, then, when};

use super::world::{
    FAILING_PROBE, PASSING_PROBE, RecordingResponder, ScriptedProbe, TestCommandWorld, run_async,
};

#[given("a test command wrapping a passing probe")]
fn passing_probe(world: &mut TestCommandWorld) {
    world.command = Some(TestCommand::new(Arc::new(ScriptedProbe { fails: false })));
}

#[given("a test command wrapping a failing probe")]
fn failing_probe(world: &mut TestCommandWorld) {
    world.command = Some(TestCommand::new(Arc::new(ScriptedProbe { fails: true })));
}

#[given("the interaction has expired")]
fn interaction_expired(world: &mut TestCommandWorld) {
    world.responder = Arc::new(RecordingResponder {
        expired: true,
        ..RecordingResponder::default()
    });
}

#[when("the test command is executed")]
fn execute_command(world: &mut TestCommandWorld) -> Result<()> {
    let command = world
        .command
        .as_ref()
        .ok_or_else(|| eyre!("no test command configured"))?;
    world.result = Some(run_async(command.execute(world.responder.as_ref())));
    Ok(())
}

#[then("the reply reports success for the passing probe")]
fn reply_reports_success(world: &mut TestCommandWorld) -> Result<()> {
    let result = world.result.as_ref().ok_or_else(|| eyre!("no result"))?;
    assert_eq!(result, &Ok(TestOutcome::Passed));

    let replies = world.responder.replies();
    let reply = replies.first().ok_or_else(|| eyre!("no reply sent"))?;
    assert_eq!(
        reply.content,
        format!("✅ The Command Works! - Tested Function: **{PASSING_PROBE}** ✅")
    );
    Ok(())
}

#[then("the reply reports failure for the failing probe")]
fn reply_reports_failure(world: &mut TestCommandWorld) -> Result<()> {
    let result = world.result.as_ref().ok_or_else(|| eyre!("no result"))?;
    assert!(matches!(result, Ok(TestOutcome::Failed(error)) if error.probe == FAILING_PROBE));

    let replies = world.responder.replies();
    let reply = replies.first().ok_or_else(|| eyre!("no reply sent"))?;
    assert_eq!(
        reply.content,
        format!("❌ The Command Failed! - Tested Function: **{FAILING_PROBE}** ❌")
    );
    Ok(())
}

#[then("the reply is visible only to the invoking user")]
fn reply_is_ephemeral(world: &mut TestCommandWorld) {
    let replies = world.responder.replies();
    assert_eq!(replies.len(), 1);
    assert!(replies.iter().all(|reply| reply.ephemeral));
}

#[then("the command fails with a closed interaction")]
fn command_fails_closed(world: &mut TestCommandWorld) -> Result<()> {
    let result = world.result.as_ref().ok_or_else(|| eyre!("no result"))?;
    assert!(matches!(
        result,
        Err(CommandError::Reply(ResponderError::InteractionClosed(_)))
    ));
    assert!(world.responder.replies().is_empty());
    Ok(())
}
