//! Host configuration, read from the environment with logged fallbacks.
//!
//! | variable                  | default                                   |
//! |---------------------------|-------------------------------------------|
//! | `CERT_DESK_HOST`          | `127.0.0.1`                               |
//! | `CERT_DESK_PORT`          | `8080`                                    |
//! | `CERT_DESK_API_BASE`      | `https://certificate-backend.onrender.com`|
//! | `CERT_DESK_OPEN_BROWSER`  | `true`                                    |
//!
//! An unparsable value is reported and replaced by its default; the host
//! never refuses to start over configuration.

use std::env;
use std::str::FromStr;

use common::config::{ApiConfig, DEFAULT_API_BASE};
use log::{info, warn};
use thiserror::Error;

pub const HOST_VAR: &str = "CERT_DESK_HOST";
pub const PORT_VAR: &str = "CERT_DESK_PORT";
pub const API_BASE_VAR: &str = "CERT_DESK_API_BASE";
pub const OPEN_BROWSER_VAR: &str = "CERT_DESK_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Handed to the browser through `/config.json`.
    pub api: ApiConfig,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: setting(&lookup, HOST_VAR, "127.0.0.1".to_string()),
            port: setting(&lookup, PORT_VAR, 8080),
            api: ApiConfig::new(setting(&lookup, API_BASE_VAR, DEFAULT_API_BASE.to_string())),
            open_browser: setting(&lookup, OPEN_BROWSER_VAR, Flag(true)).0,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn setting<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> T
where
    T::Err: ToString,
{
    match lookup(key) {
        None => default,
        Some(raw) => parse(key, &raw).unwrap_or_else(|err| {
            warn!("{err}; using default");
            default
        }),
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: ToString,
{
    let value = raw.trim();
    let parsed = value.parse::<T>().map_err(|err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: err.to_string(),
    })?;
    info!("{key} set to {value}");
    Ok(parsed)
}

/// Boolean accepting the usual spellings of yes and no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag(bool);

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Flag(true)),
            "0" | "false" | "no" | "off" => Ok(Flag(false)),
            other => Err(format!("expected a boolean, got {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api, ApiConfig::default());
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (API_BASE_VAR, "http://localhost:5000/"),
            (OPEN_BROWSER_VAR, "no"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.api.base_url(), "http://localhost:5000");
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[(PORT_VAR, "eighty"), (OPEN_BROWSER_VAR, "maybe")]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }

    #[test]
    fn parse_reports_key_and_value() {
        let err = parse::<u16>(PORT_VAR, "70000").unwrap_err();
        let ConfigError::Invalid { key, value, .. } = err;
        assert_eq!(key, PORT_VAR);
        assert_eq!(value, "70000");
    }
}
