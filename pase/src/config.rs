use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::route::RESERVED_SEGMENTS;

const DEFAULT_LOCALE: &str = "en";

const ENV_BACKEND_URL: &str = "PASE_BACKEND_URL";
const ENV_ANON_KEY: &str = "PASE_ANON_KEY";
const ENV_LOCALE: &str = "PASE_LOCALE";
const ENV_OAUTH_REDIRECT_URL: &str = "PASE_OAUTH_REDIRECT_URL";

/// Errors emitted while loading the configuration file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid locale `{0}`")]
    InvalidLocale(String),
    #[error("`anon_key` is required when `backend_url` is set")]
    MissingAnonKey,
}

/// Application configuration read from `config.json` and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) backend_url: Option<String>,
    pub(crate) anon_key: Option<String>,
    pub(crate) locale: String,
    pub(crate) oauth_redirect_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            anon_key: None,
            locale: String::from(DEFAULT_LOCALE),
            oauth_redirect_url: None,
        }
    }
}

/// Where the session and profile data live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendMode<'a> {
    Remote { url: &'a str, anon_key: &'a str },
    Offline,
}

impl AppConfig {
    pub(crate) fn backend_mode(&self) -> BackendMode<'_> {
        match (self.backend_url.as_deref(), self.anon_key.as_deref()) {
            (Some(url), Some(anon_key)) => {
                BackendMode::Remote { url, anon_key }
            },
            _ => BackendMode::Offline,
        }
    }

    /// Overlay values found through `lookup` (the process environment in
    /// production).
    pub(crate) fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = non_empty(ENV_BACKEND_URL) {
            self.backend_url = Some(url);
        }
        if let Some(key) = non_empty(ENV_ANON_KEY) {
            self.anon_key = Some(key);
        }
        if let Some(locale) = non_empty(ENV_LOCALE) {
            self.locale = locale;
        }
        if let Some(url) = non_empty(ENV_OAUTH_REDIRECT_URL) {
            self.oauth_redirect_url = Some(url);
        }
        self
    }

    pub(crate) fn validate(self) -> Result<Self, ConfigError> {
        if !is_valid_locale(&self.locale) {
            return Err(ConfigError::InvalidLocale(self.locale));
        }
        if self.backend_url.is_some() && self.anon_key.is_none() {
            return Err(ConfigError::MissingAnonKey);
        }
        Ok(self)
    }
}

fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && !RESERVED_SEGMENTS.contains(&locale)
        && locale.chars().all(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
        })
}

/// Return the directory holding the configuration and session files.
fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("pase");
    }
    std::env::temp_dir().join("pase")
}

/// Return the path to the configuration JSON file.
fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Return the path to the persisted session tokens.
pub(crate) fn session_path() -> PathBuf {
    config_dir().join("session.json")
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Load configuration from disk and the environment.
pub(crate) fn load_config() -> Result<AppConfig, ConfigError> {
    read_config_file(&config_path())?
        .apply_overrides(|key| std::env::var(key).ok())
        .validate()
}

/// Load configuration, falling back to defaults on error.
pub(crate) fn load_initial_config() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load config, using defaults: {err}");
            AppConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn given_partial_json_when_deserialized_then_defaults_fill_gaps() {
        let config: AppConfig =
            serde_json::from_str(r#"{"backend_url":"https://x.example"}"#)
                .expect("config should parse");

        assert_eq!(config.backend_url.as_deref(), Some("https://x.example"));
        assert_eq!(config.locale, "en");
        assert!(config.anon_key.is_none());
    }

    #[test]
    fn given_env_overrides_when_applied_then_they_win_over_file() {
        let config = AppConfig {
            locale: String::from("en"),
            ..AppConfig::default()
        }
        .apply_overrides(env(&[
            ("PASE_LOCALE", "u"),
            ("PASE_BACKEND_URL", "https://x.example"),
            ("PASE_ANON_KEY", "  "),
        ]));

        assert_eq!(config.locale, "u");
        assert_eq!(config.backend_url.as_deref(), Some("https://x.example"));
        assert!(config.anon_key.is_none());
    }

    #[test]
    fn given_reserved_locale_when_validated_then_rejected() {
        let config = AppConfig {
            locale: String::from("login"),
            ..AppConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLocale(_))
        ));
    }

    #[test]
    fn given_backend_without_key_when_validated_then_rejected() {
        let config = AppConfig {
            backend_url: Some(String::from("https://x.example")),
            ..AppConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::MissingAnonKey)));
    }

    #[test]
    fn given_url_and_key_then_backend_mode_is_remote() {
        let config = AppConfig {
            backend_url: Some(String::from("https://x.example")),
            anon_key: Some(String::from("anon")),
            ..AppConfig::default()
        };

        assert_eq!(
            config.backend_mode(),
            BackendMode::Remote {
                url: "https://x.example",
                anon_key: "anon",
            }
        );
        assert_eq!(AppConfig::default().backend_mode(), BackendMode::Offline);
    }

    #[test]
    fn given_missing_file_when_read_then_defaults_are_returned() {
        let path = std::env::temp_dir()
            .join("pase-config-test-missing")
            .join("config.json");

        let config = read_config_file(&path).expect("missing file is fine");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn given_config_dir_then_session_file_sits_next_to_config() {
        assert_eq!(session_path().parent(), config_path().parent());
        assert_eq!(
            session_path().file_name().and_then(|name| name.to_str()),
            Some("session.json")
        );
    }
}
