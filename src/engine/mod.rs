//! State machine execution.
//!
//! The engine is synchronous and single-threaded: [`StateMachine::process`]
//! runs one lookup and at most one state reassignment per event.

mod machine;

pub use machine::StateMachine;
