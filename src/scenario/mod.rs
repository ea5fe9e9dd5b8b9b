//! The wildlife photographer game.
//!
//! An operator reports what happens around the photographer (silence, noise,
//! an animal, the animal fleeing, a photo taken) and the photographer reacts
//! by searching, approaching, observing or photographing.

mod console;
mod photographer;
mod script;
mod signals;

pub use console::{ConsoleEnvironment, SharedOutput};
pub use photographer::{
    photographer_controller, photographer_machine, INSPECT, OBSERVE, RECORD, SEARCH,
};
pub use script::ScriptedEnvironment;
pub use signals::{GameCommand, GameEvent};

use crate::agent::{Agent, FsmController};
use crate::config::Config;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// Console environment speaking the game's events and commands.
pub type GameConsole<R, W> = ConsoleEnvironment<GameEvent, GameCommand, R, SharedOutput<W>>;

/// Photographer agent playing on a console.
pub type ConsoleAgent<R, W> = Agent<GameConsole<R, W>, FsmController<GameEvent, GameCommand>>;

/// Wire the photographer to a console using `config`.
///
/// When `config.console.show_state` is set, the controller's state is
/// written to `output` after every decision, between the event and the
/// command it answers with.
pub fn console_agent<R, W>(config: &Config, input: R, output: W) -> Result<ConsoleAgent<R, W>>
where
    R: BufRead,
    W: Write + 'static,
{
    config.validate()?;

    let output = SharedOutput::new(output);
    let environment = ConsoleEnvironment::new(
        input,
        output.clone(),
        config.console.keys.clone(),
        GameEvent::Terminate,
    )
    .with_prompt(config.console.prompt.clone());

    let mut controller = photographer_controller()?;
    controller
        .machine_mut()
        .set_record_history(config.console.record_history);
    if config.console.show_state {
        let mut sink = output;
        controller = controller.with_reporter(move |state| {
            if let Err(error) = writeln!(sink, "Current state: {}", state.name()) {
                warn!(%error, "failed to report state");
            }
        });
    }

    Ok(Agent::new(environment, controller))
}

/// Photographer agent replaying a script.
pub type ScriptedAgent =
    Agent<ScriptedEnvironment<GameEvent, GameCommand>, FsmController<GameEvent, GameCommand>>;

/// Photographer agent replaying a script, for tests and `--script`.
pub fn scripted_agent(script: Vec<Option<GameEvent>>) -> Result<ScriptedAgent> {
    Ok(Agent::new(
        ScriptedEnvironment::new(script, GameEvent::Terminate),
        photographer_controller()?,
    ))
}

/// Map console keys to events with `config`; unknown keys become `None`.
pub fn parse_script<'a>(
    config: &Config,
    keys: impl IntoIterator<Item = &'a str>,
) -> Vec<Option<GameEvent>> {
    keys.into_iter()
        .map(|key| config.console.keys.get(key.trim()).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::run_until;
    use std::io::Cursor;

    #[test]
    fn parse_script_maps_known_keys() {
        let config = Config::default();
        let script = parse_script(&config, "s, r,x ,a".split(','));

        assert_eq!(
            script,
            vec![Some(GameEvent::Silence), Some(GameEvent::Noise), None, Some(GameEvent::Animal)]
        );
    }

    #[test]
    fn console_agent_plays_until_terminate() {
        let mut config = Config::default();
        config.console.show_state = false;
        config.console.prompt = "? ".to_string();

        let input = Cursor::new(b"a a t\n".to_vec());
        let mut agent = console_agent(&config, input, Vec::new()).unwrap();
        let summary = run_until(&mut agent, &GameEvent::Terminate).unwrap();

        assert_eq!(summary.cycles, 3);
        assert_eq!(summary.commands, 2);
        assert_eq!(agent.controller().current_state().name(), RECORD);

        let output = String::from_utf8(agent.environment().output().get().clone()).unwrap();
        assert_eq!(
            output,
            "\n? Event: Animal\nCommand: Approach\nEvent: Animal\nCommand: Observe\nEvent: Terminate\n"
        );
    }

    #[test]
    fn state_reports_share_the_console_output() {
        let mut config = Config::default();
        config.console.prompt = "? ".to_string();

        let input = Cursor::new(b"a t\n".to_vec());
        let mut agent = console_agent(&config, input, Vec::new()).unwrap();
        run_until(&mut agent, &GameEvent::Terminate).unwrap();

        let output = String::from_utf8(agent.environment().output().get().clone()).unwrap();
        assert_eq!(
            output,
            "\n? Event: Animal\nCurrent state: Observe\nCommand: Approach\n\
             Event: Terminate\nCurrent state: Observe\n"
        );
    }

    #[test]
    fn console_history_follows_config() {
        let mut config = Config::default();
        config.console.show_state = false;

        let input = || Cursor::new(b"a t\n".to_vec());

        let mut quiet = console_agent(&config, input(), Vec::new()).unwrap();
        run_until(&mut quiet, &GameEvent::Terminate).unwrap();
        assert!(quiet.controller().machine().history().is_empty());

        config.console.record_history = true;
        let mut kept = console_agent(&config, input(), Vec::new()).unwrap();
        run_until(&mut kept, &GameEvent::Terminate).unwrap();
        assert_eq!(
            kept.controller().machine().history().path(),
            vec![SEARCH, OBSERVE, OBSERVE]
        );
    }

    #[test]
    fn console_agent_rejects_invalid_config() {
        let mut config = Config::default();
        config.logs.level = "chatty".to_string();

        let result = console_agent(&config, Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
