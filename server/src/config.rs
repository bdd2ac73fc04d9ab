//! Server configuration parsed from environment variables.
//!
//! Values may come from the process environment or a `.env` file loaded by
//! `main` through `dotenvy`. Parsing goes through an injectable lookup so it
//! can be tested without touching process-global state.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIRECTORY_PATH: &str = "server/fixtures/directory.yaml";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;
/// Longest accepted session lifetime (one year).
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// YAML student directory loaded at startup.
    pub directory_path: PathBuf,
    pub session_ttl: Duration,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            directory_path: PathBuf::from(DEFAULT_DIRECTORY_PATH),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_DIRECTORY`: default `server/fixtures/directory.yaml`
    /// - `SESSION_TTL_SECS`: default 28800, between 1 and one year
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::Invalid { var: "PORT", value: raw }),
            },
            None => defaults.port,
        };

        let directory_path = lookup("PORTAL_DIRECTORY")
            .filter(|raw| !raw.trim().is_empty())
            .map_or(defaults.directory_path, PathBuf::from);

        let session_ttl = match lookup("SESSION_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if (1..=MAX_SESSION_TTL_SECS).contains(&secs) => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid { var: "SESSION_TTL_SECS", value: raw }),
            },
            None => defaults.session_ttl,
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => defaults.cookie_secure,
        };

        Ok(Self { port, directory_path, session_ttl, cookie_secure })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
