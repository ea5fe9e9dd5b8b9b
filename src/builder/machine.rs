//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, Command, Event, State, StateId};
use crate::engine::StateMachine;
use crate::validation::ValidationPolicy;
use std::sync::Arc;

/// Two-phase builder for a state graph.
///
/// States are declared first with [`state`](Self::state), which hands back a
/// [`StateId`]. Transitions are then wired between ids with
/// [`on`](Self::on), so forward references, self-loops and cycles need no
/// special handling.
pub struct StateMachineBuilder<E: Event, C: Command> {
    states: Vec<State<E, C>>,
    initial: Option<StateId>,
    policy: ValidationPolicy,
    record_history: bool,
}

impl<E: Event, C: Command> StateMachineBuilder<E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            policy: ValidationPolicy::default(),
            record_history: true,
        }
    }

    /// Declare a state and return its id.
    pub fn state(&mut self, name: impl Into<String>) -> StateId {
        self.states.push(State::new(name));
        StateId::new(self.states.len() - 1)
    }

    /// Start wiring transitions out of `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` was not returned by this builder's
    /// [`state`](Self::state).
    pub fn on(&mut self, state: StateId) -> StateWiring<'_, E, C> {
        let count = self.states.len();
        let state = self.states.get_mut(state.index()).unwrap_or_else(|| {
            panic!("state {state} was not declared on this builder ({count} states)")
        });
        StateWiring { state }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set how graph violations are handled at build time.
    pub fn policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the machine keeps a step history (on by default).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the graph is invalid.
    pub fn build(self) -> Result<StateMachine<E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        StateMachine::assemble(self.states, initial, self.policy, self.record_history)
    }
}

impl<E: Event, C: Command> Default for StateMachineBuilder<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent handle for registering the transitions of one state.
pub struct StateWiring<'a, E: Event, C: Command> {
    state: &'a mut State<E, C>,
}

impl<E: Event, C: Command> StateWiring<'_, E, C> {
    /// `event` moves to `successor` and emits `action`.
    pub fn transition(self, event: E, successor: StateId, action: &Arc<Action<C>>) -> Self {
        self.state
            .add_transition(event, successor, Some(Arc::clone(action)));
        self
    }

    /// `event` moves to `successor` without emitting anything.
    pub fn transition_silent(self, event: E, successor: StateId) -> Self {
        self.state.add_transition(event, successor, None);
        self
    }
}
