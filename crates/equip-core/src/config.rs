//! Client configuration
//!
//! Settings come from environment variables with built-in fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Env var holding the lending API base URL
pub const API_URL_ENV: &str = "SCHOOLEQUIP_API_URL";
/// Env var overriding the session file location
pub const SESSION_PATH_ENV: &str = "SCHOOLEQUIP_SESSION_PATH";
/// Env var overriding the landing redirect delay (milliseconds)
pub const REDIRECT_DELAY_ENV: &str = "SCHOOLEQUIP_REDIRECT_DELAY_MS";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 500;

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Env,
    Default,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Env => "env",
            ConfigSource::Default => "default",
        }
    }
}

/// Effective client configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_url_source: ConfigSource,
    pub session_path: PathBuf,
    pub session_path_source: ConfigSource,
    pub redirect_delay: Duration,
    pub redirect_delay_source: ConfigSource,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let (api_url, api_url_source) = match non_empty_env(API_URL_ENV) {
            Some(url) => (url, ConfigSource::Env),
            None => (DEFAULT_API_URL.to_string(), ConfigSource::Default),
        };

        let (session_path, session_path_source) = match non_empty_env(SESSION_PATH_ENV) {
            Some(path) => (expand_path(&path), ConfigSource::Env),
            None => (default_session_path()?, ConfigSource::Default),
        };

        let (redirect_delay, redirect_delay_source) = match non_empty_env(REDIRECT_DELAY_ENV) {
            Some(raw) => (parse_delay_ms(&raw)?, ConfigSource::Env),
            None => (Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS), ConfigSource::Default),
        };

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            api_url_source,
            session_path,
            session_path_source,
            redirect_delay,
            redirect_delay_source,
        })
    }

    /// Build a configuration with explicit values (tests, embedding)
    pub fn with_values(api_url: &str, session_path: PathBuf) -> Self {
        Self {
            api_url: normalize_base_url(api_url),
            api_url_source: ConfigSource::Env,
            session_path,
            session_path_source: ConfigSource::Env,
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            redirect_delay_source: ConfigSource::Default,
        }
    }
}

fn parse_delay_ms(raw: &str) -> Result<Duration> {
    let ms = raw.trim().parse::<u64>().map_err(|_| {
        Error::config(format!("{} must be a number of milliseconds, got '{}'", REDIRECT_DELAY_ENV, raw))
    })?;
    Ok(Duration::from_millis(ms))
}

/// Strip trailing slashes so endpoint paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Default session file: `<config dir>/session.json`
pub fn default_session_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "schoolequip", "SchoolEquip")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;

    Ok(dirs.config_dir().join("session.json"))
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
