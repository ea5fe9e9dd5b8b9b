//! Reflex: a deterministic finite-state controller for autonomous agents
//!
//! An agent perceives its environment, decides through a state machine and
//! acts back on the environment, one cycle at a time. The state machine is a
//! plain lookup table: on each event the current state either has a
//! transition (move to its successor, emit its action if any) or it does not
//! (stay put, emit nothing).
//!
//! # Core Concepts
//!
//! - **Event / Command**: closed enums produced and consumed by an environment
//! - **State**: a named node with a per-event transition table
//! - **StateMachine**: an arena of states plus the current state
//! - **Controller**: turns a perception into an action; [`FsmController`]
//!   is backed by a state machine
//! - **Agent**: runs the perceive -> decide -> act cycle
//!
//! # Example
//!
//! ```rust
//! use reflex::agent::{run_until, Agent, FsmController};
//! use reflex::builder::StateMachineBuilder;
//! use reflex::core::Action;
//! use reflex::scenario::ScriptedEnvironment;
//! use reflex::{command_enum, event_enum};
//!
//! event_enum! {
//!     enum Weather { Sun, Rain, Night }
//! }
//! command_enum! {
//!     enum Umbrella { Open, Close }
//! }
//!
//! let mut builder = StateMachineBuilder::new();
//! let dry = builder.state("Dry");
//! let sheltered = builder.state("Sheltered");
//! let open = Action::shared(Umbrella::Open);
//! let close = Action::shared(Umbrella::Close);
//!
//! builder.on(dry).transition(Weather::Rain, sheltered, &open);
//! builder.on(sheltered).transition(Weather::Sun, dry, &close);
//!
//! let machine = builder.initial(dry).build().unwrap();
//! let environment = ScriptedEnvironment::from_events(
//!     [Weather::Sun, Weather::Rain, Weather::Rain, Weather::Sun],
//!     Weather::Night,
//! );
//! let mut agent = Agent::new(environment, FsmController::new(machine));
//!
//! let summary = run_until(&mut agent, &Weather::Night).unwrap();
//! assert_eq!(summary.cycles, 5);
//! assert_eq!(agent.environment().executed(), &[Umbrella::Open, Umbrella::Close]);
//! ```
//!
//! [`FsmController`]: agent::FsmController

pub mod agent;
pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod validation;

pub use error::{Error, Result};
