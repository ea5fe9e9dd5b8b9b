//! Eager validation of transition graphs.
//!
//! A graph is checked once, when a machine is assembled. Checks use
//! Stillwater's `Validation` type so that every violation is reported in a
//! single pass instead of stopping at the first one.
//!
//! Unreachable states are not violations: a table may carry branches that
//! no event sequence reaches. They are reported by
//! [`StateMachine::unreachable_states`](crate::engine::StateMachine::unreachable_states).
//!
//! # Example
//!
//! ```rust
//! use reflex::core::{State, StateId};
//! use reflex::validation::validate_graph;
//! use reflex::{command_enum, event_enum};
//!
//! event_enum! { enum Ev { Next } }
//! command_enum! { enum Cmd { Log } }
//!
//! let mut only: State<Ev, Cmd> = State::new("Only");
//! only.add_transition(Ev::Next, StateId::new(1), None);
//!
//! assert!(validate_graph(&[only], StateId::new(0)).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_graph, GraphValidation};
pub use violations::{GraphViolation, ValidationPolicy};
