//! Graph violations and the policy for handling them.

use thiserror::Error;

/// Structural problems found in a transition graph.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphViolation {
    #[error("State '{state}' sends '{event}' to unknown state {successor}")]
    UnknownSuccessor {
        state: String,
        event: String,
        successor: String,
    },

    #[error("Initial state {initial} is not part of the graph ({count} states)")]
    UnknownInitialState { initial: String, count: usize },

    #[error("State name '{name}' is used by more than one state")]
    DuplicateStateName { name: String },
}

impl GraphViolation {
    /// Whether a machine built despite this violation could index outside
    /// its state arena.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DuplicateStateName { .. })
    }
}

/// How a builder reacts to graph violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Refuse to build if anything is wrong
    #[default]
    Reject,

    /// Log non-fatal violations and build anyway
    WarnOnly,
}
