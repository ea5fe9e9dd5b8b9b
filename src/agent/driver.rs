//! Top-level driving loop.

use super::controller::Controller;
use super::cycle::Agent;
use super::environment::Environment;
use serde::Serialize;
use tracing::info;

/// Counters collected by [`run_until`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of evolve/step cycles run
    pub cycles: usize,
    /// Number of cycles that issued a command
    pub commands: usize,
}

/// Evolve the environment and step the agent until `terminal` is observed.
///
/// The terminal event is itself stepped before the loop ends, so a table
/// may react to it.
pub fn run_until<Env, Ctl>(
    agent: &mut Agent<Env, Ctl>,
    terminal: &Env::Event,
) -> Result<RunSummary, Env::Error>
where
    Env: Environment,
    Ctl: Controller<Event = Env::Event, Command = Env::Command>,
{
    let mut summary = RunSummary::default();
    info!(terminal = ?terminal, "agent loop started");

    loop {
        agent.environment_mut().evolve()?;
        if agent.step()?.is_some() {
            summary.commands += 1;
        }
        summary.cycles += 1;

        if agent.environment().current_event() == Some(terminal) {
            break;
        }
    }

    info!(cycles = summary.cycles, commands = summary.commands, "agent loop finished");
    Ok(summary)
}
