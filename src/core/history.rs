//! Step history tracking.
//!
//! Every event a state machine processes leaves one [`Step`] behind, whether
//! it fired a transition or was ignored. Histories are immutable values:
//! `record` returns a new history with the step appended.

use super::signal::{Command, Event};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happened to one processed event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// A transition fired and the machine moved to `to` (possibly the same state).
    Transitioned { to: String },
    /// The current state has no transition for the event.
    Ignored,
}

/// Record of a single processed event.
///
/// # Example
///
/// ```rust
/// use reflex::core::{Step, StepOutcome};
/// use reflex::{command_enum, event_enum};
/// use chrono::Utc;
///
/// event_enum! { enum Bell { Ring } }
/// command_enum! { enum Door { Open } }
///
/// let step: Step<Bell, Door> = Step {
///     from: "Closed".to_string(),
///     event: Bell::Ring,
///     outcome: StepOutcome::Transitioned { to: "Open".to_string() },
///     command: Some(Door::Open),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.resulting_state(), "Open");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<E: Event, C: Command> {
    /// Name of the state the event was processed in
    pub from: String,
    /// The processed event
    pub event: E,
    pub outcome: StepOutcome,
    /// Command emitted by the fired transition, if any
    pub command: Option<C>,
    pub timestamp: DateTime<Utc>,
}

impl<E: Event, C: Command> Step<E, C> {
    /// Name of the state the machine is in after this step.
    pub fn resulting_state(&self) -> &str {
        match &self.outcome {
            StepOutcome::Transitioned { to } => to,
            StepOutcome::Ignored => &self.from,
        }
    }

    pub fn was_ignored(&self) -> bool {
        matches!(self.outcome, StepOutcome::Ignored)
    }
}

/// Ordered history of processed events.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepHistory<E: Event, C: Command> {
    steps: Vec<Step<E, C>>,
}

impl<E: Event, C: Command> Default for StepHistory<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, C: Command> StepHistory<E, C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, step: Step<E, C>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Append in place. Used by the machine, which owns its history.
    pub(crate) fn push(&mut self, step: Step<E, C>) {
        self.steps.push(step);
    }

    /// Names of the states visited: the state of the first step, then the
    /// resulting state of every step.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from.as_str());
        }
        for step in &self.steps {
            path.push(step.resulting_state());
        }
        path
    }

    /// Commands emitted, in order. Steps without a command are skipped.
    pub fn commands(&self) -> Vec<&C> {
        self.steps.iter().filter_map(|s| s.command.as_ref()).collect()
    }

    pub fn ignored_count(&self) -> usize {
        self.steps.iter().filter(|s| s.was_ignored()).count()
    }

    /// Time between the first and the last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn steps(&self) -> &[Step<E, C>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
