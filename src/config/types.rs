use crate::scenario::GameEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Input token -> event
    #[serde(default = "default_keys")]
    pub keys: HashMap<String, GameEvent>,
    /// Print the controller's state after every decision
    #[serde(default = "default_show_state")]
    pub show_state: bool,
    /// Keep the step history of the session (off: a session can run forever)
    #[serde(default)]
    pub record_history: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            keys: default_keys(),
            show_state: default_show_state(),
            record_history: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "Event? ".to_string()
}

fn default_keys() -> HashMap<String, GameEvent> {
    GameEvent::ALL
        .iter()
        .map(|event| (event.default_key().to_string(), *event))
        .collect()
}

fn default_show_state() -> bool {
    true
}
