//! Actions attached to transitions.

use super::signal::Command;
use std::sync::Arc;

/// Immutable carrier of exactly one command.
///
/// Actions are created once while a transition table is wired and are
/// shared by reference: the same `Arc<Action<C>>` may be attached to any
/// number of transitions.
///
/// # Example
///
/// ```rust
/// use reflex::command_enum;
/// use reflex::core::Action;
/// use std::sync::Arc;
///
/// command_enum! {
///     enum Motor { Forward, Stop }
/// }
///
/// let forward = Action::shared(Motor::Forward);
/// let same = Arc::clone(&forward);
/// assert!(Arc::ptr_eq(&forward, &same));
/// assert_eq!(forward.command(), &Motor::Forward);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Action<C: Command> {
    command: C,
}

impl<C: Command> Action<C> {
    pub fn new(command: C) -> Self {
        Self { command }
    }

    /// Create an action ready to be attached to several transitions.
    pub fn shared(command: C) -> Arc<Self> {
        Arc::new(Self::new(command))
    }

    pub fn command(&self) -> &C {
        &self.command
    }
}
