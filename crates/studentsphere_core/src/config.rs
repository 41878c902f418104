//! Runtime configuration sourced from environment variables.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are
//!   errors, never silently ignored.
//! - The API key is read from `VITE_API_KEY` first, then `API_KEY`.

use crate::logging::default_log_level;
use crate::store::LatencyProfile;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "STUDENTSPHERE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "STUDENTSPHERE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STUDENTSPHERE_LOG_DIR";
pub const ENV_SIMULATED_LATENCY: &str = "STUDENTSPHERE_SIMULATED_LATENCY";
pub const ENV_AI_MODEL: &str = "STUDENTSPHERE_AI_MODEL";
pub const ENV_AI_BASE_URL: &str = "STUDENTSPHERE_AI_BASE_URL";
pub const ENV_API_KEYS: [&str; 2] = ["VITE_API_KEY", "API_KEY"];

pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        variable: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                variable,
                value,
                expected,
            } => write!(f, "invalid value `{value}` for {variable}; expected {expected}"),
        }
    }
}

impl Error for ConfigError {}

/// Hosted model settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_AI_MODEL.to_string(),
            base_url: DEFAULT_AI_BASE_URL.to_string(),
        }
    }
}

/// Everything needed to open a portal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// SQLite store file; `None` keeps data in memory for the session.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub simulated_latency: bool,
    pub gateway: GatewayConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            simulated_latency: true,
            gateway: GatewayConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let simulated_latency = match read(ENV_SIMULATED_LATENCY) {
            Some(value) => parse_switch(ENV_SIMULATED_LATENCY, &value)?,
            None => defaults.simulated_latency,
        };

        Ok(Self {
            db_path: read(ENV_DB_PATH).map(PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            simulated_latency,
            gateway: GatewayConfig {
                api_key: ENV_API_KEYS.iter().find_map(|name| read(*name)),
                model: read(ENV_AI_MODEL).unwrap_or(defaults.gateway.model),
                base_url: read(ENV_AI_BASE_URL).unwrap_or(defaults.gateway.base_url),
            },
        })
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        if self.simulated_latency {
            LatencyProfile::default()
        } else {
            LatencyProfile::disabled()
        }
    }
}

fn parse_switch(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            variable,
            value: value.to_string(),
            expected: "on|off",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = PortalConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.latency_profile(), LatencyProfile::default());
    }

    #[test]
    fn vite_api_key_wins_over_api_key() {
        let config = PortalConfig::from_lookup(lookup(&[
            ("API_KEY", "plain"),
            ("VITE_API_KEY", "vite"),
        ]))
        .unwrap();
        assert_eq!(config.gateway.api_key.as_deref(), Some("vite"));

        let fallback =
            PortalConfig::from_lookup(lookup(&[("API_KEY", "plain"), ("VITE_API_KEY", " ")]))
                .unwrap();
        assert_eq!(fallback.gateway.api_key.as_deref(), Some("plain"));
    }

    #[test]
    fn latency_switch_parses_and_rejects_garbage() {
        let off = PortalConfig::from_lookup(lookup(&[(ENV_SIMULATED_LATENCY, "OFF")])).unwrap();
        assert!(off.latency_profile().is_disabled());

        let err = PortalConfig::from_lookup(lookup(&[(ENV_SIMULATED_LATENCY, "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { variable, .. } if variable == ENV_SIMULATED_LATENCY));
    }
}
