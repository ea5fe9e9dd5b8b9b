//! Environment replaying a fixed list of events.

use crate::agent::Environment;
use crate::core::{Command, Event};
use std::collections::VecDeque;
use std::convert::Infallible;

/// Replays scripted events and records every command it receives.
///
/// `None` entries stand for input that mapped to no event. Once the script
/// is exhausted every further `evolve` produces the end event.
#[derive(Debug)]
pub struct ScriptedEnvironment<E, C> {
    script: VecDeque<Option<E>>,
    end: E,
    current: Option<E>,
    observed: Vec<E>,
    executed: Vec<C>,
}

impl<E: Event, C: Command> ScriptedEnvironment<E, C> {
    pub fn new(script: impl IntoIterator<Item = Option<E>>, end: E) -> Self {
        Self {
            script: script.into_iter().collect(),
            end,
            current: None,
            observed: Vec::new(),
            executed: Vec::new(),
        }
    }

    pub fn from_events(events: impl IntoIterator<Item = E>, end: E) -> Self {
        Self::new(events.into_iter().map(Some), end)
    }

    /// Every event handed to the agent, in order.
    pub fn observed(&self) -> &[E] {
        &self.observed
    }

    /// Every command the agent issued, in order.
    pub fn executed(&self) -> &[C] {
        &self.executed
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<E: Event, C: Command> Environment for ScriptedEnvironment<E, C> {
    type Event = E;
    type Command = C;
    type Error = Infallible;

    fn evolve(&mut self) -> Result<(), Infallible> {
        self.current = match self.script.pop_front() {
            Some(entry) => entry,
            None => Some(self.end.clone()),
        };
        Ok(())
    }

    fn current_event(&self) -> Option<&E> {
        self.current.as_ref()
    }

    fn observe(&mut self) -> Result<Option<E>, Infallible> {
        if let Some(event) = &self.current {
            self.observed.push(event.clone());
        }
        Ok(self.current.clone())
    }

    fn execute(&mut self, command: &C) -> Result<(), Infallible> {
        self.executed.push(command.clone());
        Ok(())
    }
}
