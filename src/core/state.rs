//! States and their per-event transition tables.

use super::action::Action;
use super::signal::{Command, Event};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Index of a state inside one machine's state arena.
///
/// Ids are handed out by [`StateMachineBuilder::state`](crate::builder::StateMachineBuilder::state)
/// and are only meaningful for the machine that builder produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node holding a mapping from event to transition.
///
/// Each event has at most one transition; registering the same event twice
/// replaces the earlier transition.
///
/// # Example
///
/// ```rust
/// use reflex::core::{Action, State, StateId};
/// use reflex::{command_enum, event_enum};
///
/// event_enum! {
///     enum Light { On, Off }
/// }
/// command_enum! {
///     enum Lamp { Glow }
/// }
///
/// let dark = StateId::new(0);
/// let lit = StateId::new(1);
/// let glow = Action::shared(Lamp::Glow);
///
/// let mut state: State<Light, Lamp> = State::new("Dark");
/// state
///     .add_transition(Light::On, lit, Some(glow))
///     .add_transition(Light::Off, dark, None);
///
/// assert_eq!(state.lookup(&Light::On).unwrap().successor(), lit);
/// assert!(state.lookup(&Light::Off).unwrap().action().is_none());
/// ```
#[derive(Debug)]
pub struct State<E: Event, C: Command> {
    name: String,
    transitions: HashMap<E, Transition<C>>,
}

impl<E: Event, C: Command> State<E, C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register (or overwrite) the transition fired by `event`.
    ///
    /// Returns the state itself so several transitions can be chained.
    pub fn add_transition(
        &mut self,
        event: E,
        successor: StateId,
        action: Option<Arc<Action<C>>>,
    ) -> &mut Self {
        self.transitions
            .insert(event, Transition::new(successor, action));
        self
    }

    /// Transition registered for `event`, or `None` if the event is ignored here.
    pub fn lookup(&self, event: &E) -> Option<&Transition<C>> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &E) -> bool {
        self.transitions.contains_key(event)
    }

    pub fn transitions(&self) -> impl Iterator<Item = (&E, &Transition<C>)> {
        self.transitions.iter()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Up,
        Down,
        Left,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Up => "Up",
                Self::Down => "Down",
                Self::Left => "Left",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestCommand {
        Move,
        Turn,
    }

    impl Command for TestCommand {
        fn name(&self) -> &str {
            match self {
                Self::Move => "Move",
                Self::Turn => "Turn",
            }
        }
    }

    #[test]
    fn new_state_has_no_transitions() {
        let state: State<TestEvent, TestCommand> = State::new("Idle");

        assert_eq!(state.name(), "Idle");
        assert_eq!(state.transition_count(), 0);
        assert!(state.lookup(&TestEvent::Up).is_none());
    }

    #[test]
    fn chained_registration_resolves_each_event() {
        let mut state: State<TestEvent, TestCommand> = State::new("Idle");
        let step = Action::shared(TestCommand::Move);

        state
            .add_transition(TestEvent::Up, StateId::new(1), Some(Arc::clone(&step)))
            .add_transition(TestEvent::Down, StateId::new(2), None);

        assert_eq!(state.transition_count(), 2);
        assert_eq!(state.lookup(&TestEvent::Up).unwrap().successor(), StateId::new(1));
        assert_eq!(state.lookup(&TestEvent::Down).unwrap().successor(), StateId::new(2));
        assert!(!state.handles(&TestEvent::Left));
    }

    #[test]
    fn registration_order_is_irrelevant() {
        let mut forward: State<TestEvent, TestCommand> = State::new("A");
        forward
            .add_transition(TestEvent::Up, StateId::new(1), None)
            .add_transition(TestEvent::Down, StateId::new(2), None);

        let mut backward: State<TestEvent, TestCommand> = State::new("A");
        backward
            .add_transition(TestEvent::Down, StateId::new(2), None)
            .add_transition(TestEvent::Up, StateId::new(1), None);

        for event in [TestEvent::Up, TestEvent::Down] {
            assert_eq!(
                forward.lookup(&event).map(Transition::successor),
                backward.lookup(&event).map(Transition::successor)
            );
        }
    }

    #[test]
    fn last_registration_wins() {
        let mut state: State<TestEvent, TestCommand> = State::new("Idle");

        state
            .add_transition(TestEvent::Up, StateId::new(1), Some(Action::shared(TestCommand::Move)))
            .add_transition(TestEvent::Up, StateId::new(3), Some(Action::shared(TestCommand::Turn)));

        let transition = state.lookup(&TestEvent::Up).unwrap();
        assert_eq!(state.transition_count(), 1);
        assert_eq!(transition.successor(), StateId::new(3));
        assert_eq!(transition.action().unwrap().command(), &TestCommand::Turn);
    }

    #[test]
    fn state_id_displays_index() {
        assert_eq!(StateId::new(4).to_string(), "#4");
        assert_eq!(StateId::new(4).index(), 4);
    }
}
