//! Events and commands of the wildlife photographer game.

use crate::{command_enum, event_enum};

event_enum! {
    /// Something the photographer can notice.
    pub enum GameEvent {
        Silence,
        Noise,
        Animal,
        Flee,
        Photograph,
        Terminate,
    }
}

command_enum! {
    /// Something the photographer can do.
    pub enum GameCommand {
        Search,
        Approach,
        Observe,
        Photograph,
    }
}

impl GameEvent {
    /// Default one-letter key for each event on the console.
    pub fn default_key(self) -> &'static str {
        match self {
            Self::Silence => "s",
            Self::Noise => "r",
            Self::Animal => "a",
            Self::Flee => "f",
            Self::Photograph => "o",
            Self::Terminate => "t",
        }
    }

    pub const ALL: [GameEvent; 6] = [
        Self::Silence,
        Self::Noise,
        Self::Animal,
        Self::Flee,
        Self::Photograph,
        Self::Terminate,
    ];
}
