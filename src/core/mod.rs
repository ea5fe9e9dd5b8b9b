//! Core data model of the state machine engine.
//!
//! - Event and command traits
//! - Actions, transitions and states
//! - Immutable step history
//!
//! Nothing in this module performs I/O except the `render` helpers, which
//! write to a caller-supplied writer.

mod action;
mod history;
mod signal;
mod state;
mod transition;

pub use action::Action;
pub use history::{Step, StepHistory, StepOutcome};
pub use signal::{Command, Event};
pub use state::{State, StateId};
pub use transition::Transition;
