//! Perceptions handed from the agent to its controller.

use crate::core::Event;

/// The agent's observation of one event, created fresh every cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Perception<E: Event> {
    event: E,
}

impl<E: Event> Perception<E> {
    pub fn new(event: E) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &E {
        &self.event
    }
}

impl<E: Event> From<E> for Perception<E> {
    fn from(event: E) -> Self {
        Self::new(event)
    }
}
