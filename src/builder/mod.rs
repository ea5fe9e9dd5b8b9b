//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent two-phase builder for transition tables and
//! macros for declaring event and command enums with minimal boilerplate.
//!
//! # Example
//!
//! ```
//! use reflex::builder::StateMachineBuilder;
//! use reflex::core::Action;
//! use reflex::{command_enum, event_enum};
//!
//! event_enum! {
//!     enum Light { Red, Green }
//! }
//! command_enum! {
//!     enum Car { Go, Stop }
//! }
//!
//! let mut builder = StateMachineBuilder::new();
//! let waiting = builder.state("Waiting");
//! let driving = builder.state("Driving");
//! let go = Action::shared(Car::Go);
//! let stop = Action::shared(Car::Stop);
//!
//! builder.on(waiting).transition(Light::Green, driving, &go);
//! builder
//!     .on(driving)
//!     .transition(Light::Red, waiting, &stop)
//!     .transition_silent(Light::Green, driving);
//!
//! let mut machine = builder.initial(waiting).build().unwrap();
//! let action = machine.process(&Light::Green).unwrap();
//! assert_eq!(action.command(), &Car::Go);
//! assert_eq!(machine.current_state().name(), "Driving");
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::{StateMachineBuilder, StateWiring};
