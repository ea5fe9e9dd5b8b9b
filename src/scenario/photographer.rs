//! Transition table of the photographer character.

use super::signals::{GameCommand, GameEvent};
use crate::agent::FsmController;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::Action;
use crate::engine::StateMachine;

pub const SEARCH: &str = "Search";
pub const INSPECT: &str = "Inspect";
pub const OBSERVE: &str = "Observe";
pub const RECORD: &str = "Record";

/// Build the photographer's state machine, starting in [`SEARCH`].
pub fn photographer_machine() -> Result<StateMachine<GameEvent, GameCommand>, BuildError> {
    use GameEvent::*;

    let mut builder = StateMachineBuilder::new();
    let search = builder.state(SEARCH);
    let inspect = builder.state(INSPECT);
    let observe = builder.state(OBSERVE);
    let record = builder.state(RECORD);

    let searching = Action::shared(GameCommand::Search);
    let approaching = Action::shared(GameCommand::Approach);
    let observing = Action::shared(GameCommand::Observe);
    let photographing = Action::shared(GameCommand::Photograph);

    builder
        .on(search)
        .transition(Animal, observe, &approaching)
        .transition(Noise, inspect, &approaching)
        .transition(Silence, search, &searching);

    builder
        .on(inspect)
        .transition(Animal, observe, &approaching)
        .transition_silent(Silence, search)
        .transition(Noise, inspect, &searching);

    builder
        .on(observe)
        .transition(Animal, record, &observing)
        .transition_silent(Flee, inspect);

    builder
        .on(record)
        .transition_silent(Flee, search)
        .transition_silent(Photograph, search)
        .transition(Animal, record, &photographing);

    builder.initial(search).build()
}

/// Controller driving the photographer character.
pub fn photographer_controller() -> Result<FsmController<GameEvent, GameCommand>, BuildError> {
    Ok(FsmController::new(photographer_machine()?))
}
