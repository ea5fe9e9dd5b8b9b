//! Transition records stored in each state's table.

use super::action::Action;
use super::signal::Command;
use super::state::StateId;
use std::sync::Arc;

/// The successor and optional action fired by one event in one state.
///
/// The successor is an index into the owning machine's state arena, so a
/// transition never owns the state it points to.
#[derive(Debug)]
pub struct Transition<C: Command> {
    successor: StateId,
    action: Option<Arc<Action<C>>>,
}

impl<C: Command> Transition<C> {
    pub fn new(successor: StateId, action: Option<Arc<Action<C>>>) -> Self {
        Self { successor, action }
    }

    pub fn successor(&self) -> StateId {
        self.successor
    }

    /// The action emitted when this transition fires, if any.
    pub fn action(&self) -> Option<&Arc<Action<C>>> {
        self.action.as_ref()
    }
}

impl<C: Command> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            successor: self.successor,
            action: self.action.clone(),
        }
    }
}
