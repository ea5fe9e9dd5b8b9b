//! The environment an agent perceives and acts on.

use crate::core::{Command, Event};

/// Source of events and sink of commands.
///
/// Any blocking (waiting for input, polling sensors) happens inside
/// [`evolve`](Self::evolve); the agent loop itself never blocks.
pub trait Environment {
    type Event: Event;
    type Command: Command;
    type Error: std::error::Error;

    /// Advance the environment to its next event.
    fn evolve(&mut self) -> Result<(), Self::Error>;

    /// The event produced by the last `evolve`, without side effects.
    ///
    /// `None` before the first `evolve`, or when the last input mapped to no
    /// known event.
    fn current_event(&self) -> Option<&Self::Event>;

    /// Return the current event and present it to the operator.
    fn observe(&mut self) -> Result<Option<Self::Event>, Self::Error>;

    /// Perform `command`.
    fn execute(&mut self, command: &Self::Command) -> Result<(), Self::Error>;
}
