use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};
use crate::settings::Settings;
use crate::ui::{ThemeMode, View};

const CONFIG_PATH_ENV_VAR: &str = "DASHBOARD_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("dashboard").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".dashboard.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    tick_rate_ms: u64,
    pub theme: ThemeMode,
    pub sidebar_collapsed: bool,
    pub start_view: View,
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            theme: ThemeMode::default(),
            sidebar_collapsed: false,
            start_view: View::default(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("Could not read config file {}", path.display()))
        })?;

        Config::from_toml_str(&content).map_err(|err| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("{}: {}", path.display(), err),
            )
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Loads `path` if one was given explicitly, otherwise the first existing
/// file among the default locations. Falls back to the defaults if there is
/// none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from {}", path.display());
        return Config::load(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("Loading config from {}", location.display());
            Config::load(&location)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Language, Timezone};

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.start_view, View::Dashboard);
        assert!(!config.sidebar_collapsed);
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml_str(
            r#"
            tick_rate_ms = 250
            theme = "dark"
            sidebar_collapsed = true
            start_view = "calendar"

            [settings]
            language = "es"
            timezone = "EST"
            notifications = false
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.sidebar_collapsed);
        assert_eq!(config.start_view, View::Calendar);
        assert_eq!(
            config.settings,
            Settings::new(Language::Spanish, Timezone::Est, false)
        );
    }

    #[test]
    fn malformed_config() {
        let err = Config::from_toml_str("start_view = \"reports\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/dashboard.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
        assert_eq!(
            err.message.as_deref(),
            Some("Could not read config file /nonexistent/dashboard.toml")
        );
    }
}
