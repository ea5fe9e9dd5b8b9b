//! Build errors for state machines.

use crate::validation::GraphViolation;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition graph is invalid: {}", summarize(.0))]
    InvalidGraph(Vec<GraphViolation>),
}

fn summarize(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
