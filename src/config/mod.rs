//! Configuration loading.
//!
//! Configuration is YAML. The file named by `REFLEX_CONFIG` is loaded if the
//! variable is set; otherwise `reflex.yaml` in the working directory is used
//! when present, and built-in defaults when not.

mod error;
mod types;

pub use error::ConfigError;
pub use types::*;

use std::env;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

pub const CONFIG_ENV: &str = "REFLEX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "reflex.yaml";

/// Load from `REFLEX_CONFIG` when set, otherwise like [`load_default`].
///
/// The variable is read as an OS string, so any path the platform accepts
/// is honoured; a set but unreadable path is an error, never a fallback.
pub fn load() -> Result<Config, ConfigError> {
    load_from_var(env::var_os(CONFIG_ENV))
}

fn load_from_var(value: Option<OsString>) -> Result<Config, ConfigError> {
    match value {
        Some(path) => load_from(path),
        None => load_default(),
    }
}

/// Load `reflex.yaml` from the working directory, or the built-in defaults
/// when there is no such file.
pub fn load_default() -> Result<Config, ConfigError> {
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from(DEFAULT_CONFIG_PATH);
    }
    debug!("No configuration file, using defaults");
    Ok(Config::default())
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml(&text)
}

pub fn from_yaml(text: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logs.level_filter()?;
        for key in self.console.keys.keys() {
            if key.is_empty() || key.split_whitespace().count() != 1 {
                return Err(ConfigError::InvalidKey(key.clone()));
            }
        }
        Ok(())
    }
}

impl LogsConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::GameEvent;

    #[test]
    fn defaults_cover_every_event() {
        let config = Config::default();

        assert_eq!(config.logs.level, "warn");
        assert_eq!(config.console.prompt, "Event? ");
        assert!(config.console.show_state);
        assert!(!config.console.record_history);
        assert_eq!(config.console.keys.len(), GameEvent::ALL.len());
        assert_eq!(config.console.keys["t"], GameEvent::Terminate);
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn yaml_overrides_sections() {
        let config = from_yaml(
            "logs:\n  level: debug\nconsole:\n  show_state: false\n  keys:\n    animal: Animal\n    quit: Terminate\n",
        )
        .unwrap();

        assert_eq!(config.logs.level, "debug");
        assert!(!config.console.show_state);
        assert_eq!(config.console.prompt, "Event? ");
        assert_eq!(config.console.keys.len(), 2);
        assert_eq!(config.console.keys["quit"], GameEvent::Terminate);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let result = from_yaml("logs:\n  level: loud\n");
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }

    #[test]
    fn unknown_event_name_is_rejected() {
        let result = from_yaml("console:\n  keys:\n    z: Thunder\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn keys_with_spaces_are_rejected() {
        let result = from_yaml("console:\n  keys:\n    \"a b\": Animal\n");
        assert!(matches!(result, Err(ConfigError::InvalidKey(_))));
    }

    #[test]
    fn configured_path_is_never_silently_skipped() {
        let result = load_from_var(Some(OsString::from("/nonexistent/configured.yaml")));
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/configured.yaml"))
            }
            other => panic!("Expected a read error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_path_is_read_not_ignored() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/nonexistent/\xffreflex.yaml".to_vec());
        let result = load_from_var(Some(raw.clone()));
        match result {
            Err(ConfigError::Read { path, .. }) => assert_eq!(path.as_os_str(), raw.as_os_str()),
            other => panic!("Expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let result = load_from("/nonexistent/reflex.yaml");
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/reflex.yaml"))
            }
            other => panic!("Expected a read error, got {other:?}"),
        }
    }
}
