//! Controllers: the decision step of the agent loop.

use super::perception::Perception;
use crate::core::{Action, Command, Event, State};
use crate::engine::StateMachine;
use std::sync::Arc;
use tracing::debug;

/// Capability that turns a perception into an action.
pub trait Controller {
    type Event: Event;
    type Command: Command;

    /// Decide what to do about `perception`. `None` means no command this cycle.
    fn decide(
        &mut self,
        perception: &Perception<Self::Event>,
    ) -> Option<Arc<Action<Self::Command>>>;
}

/// Callback invoked with the current state after every decision.
pub type StateReporter<E, C> = Box<dyn FnMut(&State<E, C>)>;

/// Controller backed by a [`StateMachine`].
///
/// Every perception is forwarded to [`StateMachine::process`]. After each
/// decision the new current state is reported through the optional reporter
/// and a `debug` trace.
pub struct FsmController<E: Event, C: Command> {
    machine: StateMachine<E, C>,
    reporter: Option<StateReporter<E, C>>,
}

impl<E: Event, C: Command> FsmController<E, C> {
    pub fn new(machine: StateMachine<E, C>) -> Self {
        Self {
            machine,
            reporter: None,
        }
    }

    /// Report the current state after every decision.
    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: FnMut(&State<E, C>) + 'static,
    {
        self.reporter = Some(Box::new(reporter));
        self
    }

    pub fn machine(&self) -> &StateMachine<E, C> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut StateMachine<E, C> {
        &mut self.machine
    }

    pub fn current_state(&self) -> &State<E, C> {
        self.machine.current_state()
    }
}

impl<E: Event, C: Command> Controller for FsmController<E, C> {
    type Event = E;
    type Command = C;

    fn decide(&mut self, perception: &Perception<E>) -> Option<Arc<Action<C>>> {
        let action = self.machine.process(perception.event());

        let state = self.machine.current_state();
        debug!(state = state.name(), "controller decided");
        if let Some(report) = self.reporter.as_mut() {
            report(state);
        }

        action
    }
}
