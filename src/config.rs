// src/config.rs
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, read from the environment once at startup and
/// handed to the state. The relay holds no other process-wide settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API credential. Required; never rotated at runtime.
    pub openai_api_key: String,
    /// Fixed model identifier sent with every completion call.
    pub openai_model: String,
    /// Chat-completions base URL; tests point this at a stub server.
    pub openai_base_url: String,
    /// Audit file path. Unset disables the exchange log entirely.
    pub chat_log_file: Option<PathBuf>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any variable source; tests pass a closure over
    /// a map instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let openai_api_key = var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_model = var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_base_url =
            var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let chat_log_file = var("CHAT_LOG_FILE").map(PathBuf::from);
        let port = var("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            openai_api_key,
            openai_model,
            openai_base_url,
            chat_log_file,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let env = env(&[("OPENAI_API_KEY", "sk-test")]);
        let config = AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert!(config.chat_log_file.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn missing_api_key_is_a_startup_error() {
        let env = env(&[]);
        let err = AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn empty_api_key_treated_as_unset() {
        let env = env(&[("OPENAI_API_KEY", "")]);
        assert!(AppConfig::from_lookup(|key| env.get(key).cloned()).is_err());
    }

    #[test]
    fn custom_values_override_defaults() {
        let env = env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:4010/v1"),
            ("CHAT_LOG_FILE", "output/chat_log.txt"),
            ("PORT", "9090"),
        ]);
        let config = AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.openai_base_url, "http://127.0.0.1:4010/v1");
        assert_eq!(
            config.chat_log_file.as_deref(),
            Some(std::path::Path::new("output/chat_log.txt"))
        );
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let env = env(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "not-a-port")]);
        let config = AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_chat_log_path_disables_logging() {
        let env = env(&[("OPENAI_API_KEY", "sk-test"), ("CHAT_LOG_FILE", "")]);
        let config = AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert!(config.chat_log_file.is_none());
    }
}
