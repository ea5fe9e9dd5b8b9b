//! Event and command traits.
//!
//! Events are what an environment produces and a state machine consumes.
//! Commands are what a controller emits back to the environment. Both are
//! small closed sets per scenario, normally expressed as fieldless enums
//! (see [`event_enum!`](crate::event_enum) and
//! [`command_enum!`](crate::command_enum)).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::{self, Write};

/// Trait for observable events, the input alphabet of a state machine.
///
/// # Required Traits
///
/// - `Eq` + `Hash`: events key each state's transition map
/// - `Clone` + `Debug`: events are copied into the step history
/// - `Serialize` + `Deserialize`: histories and key tables are serializable
///
/// # Example
///
/// ```rust
/// use reflex::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Knock,
///     Quiet,
/// }
///
/// impl Event for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Knock => "Knock",
///             Self::Quiet => "Quiet",
///         }
///     }
/// }
///
/// let mut out = Vec::new();
/// Door::Knock.render(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Event: Knock\n");
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Stable name for display and logging.
    fn name(&self) -> &str;

    /// Render the event for a human observer.
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Event: {}", self.name())
    }
}

/// Trait for commands the agent sends to its environment.
pub trait Command:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Stable name for display and logging.
    fn name(&self) -> &str;

    /// Render the command for a human observer.
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Command: {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Ping,
        Pong,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Ping => "Ping",
                Self::Pong => "Pong",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestCommand {
        Reply,
    }

    impl Command for TestCommand {
        fn name(&self) -> &str {
            "Reply"
        }

        fn render(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "> {}", self.name())
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_event_render_writes_name() {
        assert_eq!(rendered(|o| TestEvent::Pong.render(o)), "Event: Pong\n");
    }

    #[test]
    fn command_render_can_be_overridden() {
        assert_eq!(rendered(|o| TestCommand::Reply.render(o)), "> Reply\n");
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(TestEvent::Ping.name(), TestEvent::Ping.name());
        assert_ne!(TestEvent::Ping.name(), TestEvent::Pong.name());
    }
}
