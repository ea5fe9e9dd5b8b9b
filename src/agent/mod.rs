//! Agent loop: perceive, decide, act.
//!
//! - [`Environment`]: where events come from and commands go to
//! - [`Controller`]: the decision capability, with [`FsmController`] as the
//!   state-machine-backed implementation
//! - [`Agent`]: one environment plus one controller, stepped one cycle at a time
//! - [`run_until`]: the driver that evolves and steps until a terminal event

mod controller;
mod cycle;
mod driver;
mod environment;
mod perception;

pub use controller::{Controller, FsmController, StateReporter};
pub use cycle::Agent;
pub use driver::{run_until, RunSummary};
pub use environment::Environment;
pub use perception::Perception;
