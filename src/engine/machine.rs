//! Event-driven state machine over an arena of states.

use crate::builder::BuildError;
use crate::core::{Action, Command, Event, State, StateId, Step, StepHistory, StepOutcome};
use crate::validation::{validate_graph, ValidationPolicy};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// Deterministic finite-state machine.
///
/// Holds every state of one transition graph plus the id of the current
/// state. Each call to [`process`](Self::process) performs one lookup in the
/// current state's table and, when a transition exists, moves to its
/// successor and yields its action.
pub struct StateMachine<E: Event, C: Command> {
    states: Vec<State<E, C>>,
    initial: StateId,
    current: StateId,
    history: StepHistory<E, C>,
    record_history: bool,
}

impl<E: Event, C: Command> StateMachine<E, C> {
    /// Assemble a machine from states wired by hand.
    ///
    /// The graph is validated with [`ValidationPolicy::Reject`].
    pub fn from_parts(states: Vec<State<E, C>>, initial: StateId) -> Result<Self, BuildError> {
        Self::assemble(states, initial, ValidationPolicy::Reject, true)
    }

    pub(crate) fn assemble(
        states: Vec<State<E, C>>,
        initial: StateId,
        policy: ValidationPolicy,
        record_history: bool,
    ) -> Result<Self, BuildError> {
        policy.apply(validate_graph(&states, initial))?;

        let machine = Self {
            states,
            initial,
            current: initial,
            history: StepHistory::new(),
            record_history,
        };

        for name in machine.unreachable_states() {
            debug!(state = name, "state is unreachable from the initial state");
        }

        Ok(machine)
    }

    /// Feed one event to the machine.
    ///
    /// If the current state has a transition for `event`, the machine moves
    /// to its successor (even when that is the current state) and returns the
    /// transition's action, which may be `None`. If there is no transition,
    /// the event is ignored: the state is unchanged and `None` is returned.
    pub fn process(&mut self, event: &E) -> Option<Arc<Action<C>>> {
        let state = &self.states[self.current.index()];

        let Some(transition) = state.lookup(event) else {
            trace!(state = state.name(), event = event.name(), "event ignored");
            if self.record_history {
                self.history.push(Step {
                    from: state.name().to_string(),
                    event: event.clone(),
                    outcome: StepOutcome::Ignored,
                    command: None,
                    timestamp: Utc::now(),
                });
            }
            return None;
        };

        let successor = transition.successor();
        let action = transition.action().cloned();
        let to = self.states[successor.index()].name();

        debug!(
            from = state.name(),
            event = event.name(),
            to,
            command = action.as_ref().map(|a| a.command().name()),
            "transition fired"
        );

        if self.record_history {
            self.history.push(Step {
                from: state.name().to_string(),
                event: event.clone(),
                outcome: StepOutcome::Transitioned { to: to.to_string() },
                command: action.as_ref().map(|a| a.command().clone()),
                timestamp: Utc::now(),
            });
        }

        self.current = successor;
        action
    }

    pub fn current_state(&self) -> &State<E, C> {
        &self.states[self.current.index()]
    }

    pub fn current_id(&self) -> StateId {
        self.current
    }

    pub fn initial_id(&self) -> StateId {
        self.initial
    }

    pub fn state(&self, id: StateId) -> Option<&State<E, C>> {
        self.states.get(id.index())
    }

    /// Id of the first state called `name`.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(StateId::new)
    }

    pub fn states(&self) -> &[State<E, C>] {
        &self.states
    }

    pub fn history(&self) -> &StepHistory<E, C> {
        &self.history
    }

    /// Start or stop recording steps. Steps already recorded are kept.
    pub fn set_record_history(&mut self, enabled: bool) {
        self.record_history = enabled;
    }

    /// Return to the initial state and forget the history.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.history = StepHistory::new();
    }

    /// Names of states no event sequence can reach from the initial state.
    pub fn unreachable_states(&self) -> Vec<&str> {
        let mut seen = vec![false; self.states.len()];
        let mut queue = VecDeque::from([self.initial]);
        seen[self.initial.index()] = true;

        while let Some(id) = queue.pop_front() {
            for (_, transition) in self.states[id.index()].transitions() {
                let next = transition.successor();
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        self.states
            .iter()
            .zip(seen)
            .filter(|(_, reached)| !reached)
            .map(|(s, _)| s.name())
            .collect()
    }
}
