//! Server configuration read from the process environment.

use std::str::FromStr;

use shelfkeep_domain::IdPolicy;

use crate::application::UpdateMode;
use crate::use_cases::{MissingDeletePolicy, UseCaseConfig};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    #[default]
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err("expected sqlite or memory".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub backend: StoreBackend,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Require UUID v4 identifiers for books.
    pub strict_ids: bool,
    /// Empty every store once it is initialized.
    pub reset_on_start: bool,
    pub missing_delete: MissingDeletePolicy,
    pub update_mode: UpdateMode,
    pub cors_allowed_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            strict_ids: false,
            reset_on_start: false,
            missing_delete: MissingDeletePolicy::default(),
            update_mode: UpdateMode::default(),
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let backend = match get("STORE_BACKEND") {
            Some(raw) => raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid("STORE_BACKEND", &raw, reason))?,
            None => defaults.backend,
        };

        let port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("SERVER_PORT", &raw, e.to_string()))?,
            None => defaults.port,
        };

        let strict_ids = match get("STRICT_IDS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::invalid("STRICT_IDS", &raw, "expected true or false")
            })?,
            None => defaults.strict_ids,
        };

        let reset_on_start = match get("RESET_ON_START") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::invalid("RESET_ON_START", &raw, "expected true or false")
            })?,
            None => defaults.reset_on_start,
        };

        let missing_delete = match get("MISSING_DELETE") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "reject" => MissingDeletePolicy::Reject,
                "ignore" => MissingDeletePolicy::Ignore,
                _ => {
                    return Err(ConfigError::invalid(
                        "MISSING_DELETE",
                        &raw,
                        "expected reject or ignore",
                    ))
                }
            },
            None => defaults.missing_delete,
        };

        let update_mode = match get("UPDATE_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid("UPDATE_MODE", &raw, reason))?,
            None => defaults.update_mode,
        };

        Ok(Self {
            backend,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            host: get("SERVER_HOST").unwrap_or(defaults.host),
            port,
            strict_ids,
            reset_on_start,
            missing_delete,
            update_mode,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        })
    }

    /// Use case settings for a record kind; only books honour `strict_ids`.
    pub fn use_case_config(&self, uuid_ids: bool) -> UseCaseConfig {
        UseCaseConfig {
            id_policy: if uuid_ids && self.strict_ids {
                IdPolicy::Uuid4
            } else {
                IdPolicy::NonEmpty
            },
            missing_delete: self.missing_delete,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("DATABASE_URL", "/tmp/shelf.db"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("STRICT_IDS", "true"),
            ("RESET_ON_START", "yes"),
            ("MISSING_DELETE", "ignore"),
            ("UPDATE_MODE", "merge"),
            ("CORS_ALLOWED_ORIGINS", "*"),
        ])
        .unwrap();

        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.database_url, "/tmp/shelf.db");
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(config.strict_ids);
        assert!(config.reset_on_start);
        assert_eq!(config.missing_delete, MissingDeletePolicy::Ignore);
        assert_eq!(config.update_mode, UpdateMode::Merge);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = config_from(&[("PORT", "3000")]).unwrap();
        assert_eq!(config.port, 3000);

        let config = config_from(&[("PORT", "3000"), ("SERVER_PORT", "4000")]).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SERVER_PORT", .. }));

        assert!(config_from(&[("STORE_BACKEND", "postgres")]).is_err());
        assert!(config_from(&[("STRICT_IDS", "maybe")]).is_err());
        assert!(config_from(&[("RESET_ON_START", "sometimes")]).is_err());
        assert!(config_from(&[("MISSING_DELETE", "explode")]).is_err());
        assert!(config_from(&[("UPDATE_MODE", "patch")]).is_err());
    }

    #[test]
    fn strict_ids_only_apply_to_uuid_kinds() {
        let config = config_from(&[("STRICT_IDS", "1")]).unwrap();
        assert_eq!(config.use_case_config(true).id_policy, IdPolicy::Uuid4);
        assert_eq!(config.use_case_config(false).id_policy, IdPolicy::NonEmpty);
        assert_eq!(
            ServerConfig::default().use_case_config(true).id_policy,
            IdPolicy::NonEmpty
        );
    }
}
