//! Graph checks run before a machine is assembled.

use crate::builder::BuildError;
use crate::core::{Command, Event, State, StateId};
use crate::validation::violations::{GraphViolation, ValidationPolicy};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Result of validating a graph. Failures carry every violation found.
pub type GraphValidation = Validation<(), NonEmptyVec<GraphViolation>>;

/// Check a state arena and its initial state, accumulating ALL violations.
pub fn validate_graph<E: Event, C: Command>(
    states: &[State<E, C>],
    initial: StateId,
) -> GraphValidation {
    let mut checks: Vec<GraphValidation> = Vec::new();

    checks.push(if initial.index() < states.len() {
        Validation::success(())
    } else {
        Validation::fail(GraphViolation::UnknownInitialState {
            initial: initial.to_string(),
            count: states.len(),
        })
    });

    for state in states {
        for (event, transition) in state.transitions() {
            let successor = transition.successor();
            if successor.index() >= states.len() {
                checks.push(Validation::fail(GraphViolation::UnknownSuccessor {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                    successor: successor.to_string(),
                }));
            }
        }
    }

    let mut names = HashSet::new();
    let mut reported = HashSet::new();
    for state in states {
        if !names.insert(state.name()) && reported.insert(state.name()) {
            checks.push(Validation::fail(GraphViolation::DuplicateStateName {
                name: state.name().to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

impl ValidationPolicy {
    /// Turn a validation outcome into a build result under this policy.
    pub fn apply(self, validation: GraphValidation) -> Result<(), BuildError> {
        let violations: Vec<GraphViolation> = match validation {
            Validation::Success(_) => return Ok(()),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };

        match self {
            Self::Reject => Err(BuildError::InvalidGraph(violations)),
            Self::WarnOnly => {
                if violations.iter().any(GraphViolation::is_fatal) {
                    return Err(BuildError::InvalidGraph(violations));
                }
                for violation in &violations {
                    warn!(%violation, "building state machine despite graph violation");
                }
                Ok(())
            }
        }
    }
}
