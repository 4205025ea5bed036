use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";
pub const BASE_URL_ENV: &str = "ACTIVITIES_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Applies overrides, highest priority first: command line, then environment.
    pub fn with_overrides(mut self, cli_base_url: Option<String>, env_base_url: Option<String>) -> Self {
        if let Some(base_url) = cli_base_url.or(env_base_url) {
            self.base_url = base_url;
        }
        self
    }

    pub fn base_url(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(self.base_url.clone()));
        }
        Ok(url)
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|err| {
            log::warn!("Failed to parse config file {}: {err}", path.display());
            AppConfig::default()
        }),
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

fn parse_config(content: &str) -> Result<AppConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        assert_eq!(parse_config("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        assert_eq!(
            load_config("does/not/exist/client.json"),
            AppConfig::default()
        );
    }

    #[test]
    fn command_line_beats_environment() {
        let config = AppConfig::default().with_overrides(
            Some("http://cli.test/".into()),
            Some("http://env.test/".into()),
        );
        assert_eq!(config.base_url, "http://cli.test/");

        let config = AppConfig::default().with_overrides(None, Some("http://env.test/".into()));
        assert_eq!(config.base_url, "http://env.test/");

        let config = AppConfig::default().with_overrides(None, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_is_validated() {
        assert!(AppConfig::default().base_url().is_ok());

        let relative = AppConfig {
            base_url: "activities".into(),
        };
        assert!(matches!(relative.base_url(), Err(ApiError::Url(_))));

        let opaque = AppConfig {
            base_url: "mailto:office@mergington.edu".into(),
        };
        assert!(matches!(opaque.base_url(), Err(ApiError::BaseUrl(_))));
    }
}
