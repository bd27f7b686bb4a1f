//! Runtime configuration read from the environment.
//!
//! `.env.local` and `.env` at the repository root are loaded first (see
//! `main.rs`), then every key falls back to a default.

use crate::use_cases::RetryConfig;

/// Which document store adapter to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown PANTRY_STORE value: {0} (expected 'memory' or 'sqlite')")]
    UnknownStore(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    /// Namespace for every document this deployment writes.
    pub project_id: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
    pub retry: RetryConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let store = match get("PANTRY_STORE").as_deref() {
            None | Some("sqlite") => StoreBackend::Sqlite {
                path: get("PANTRY_DB").unwrap_or_else(|| "pantry.db".into()),
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        let server_port: u16 = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber {
                key: "SERVER_PORT",
                value: raw.clone(),
            })?,
            None => 3000,
        };

        let mut retry = RetryConfig::default();
        if let Some(raw) = get("LEDGER_MAX_ATTEMPTS") {
            let attempts: u32 = raw.parse().map_err(|_| ConfigError::InvalidNumber {
                key: "LEDGER_MAX_ATTEMPTS",
                value: raw.clone(),
            })?;
            retry.max_attempts = attempts.max(1);
        }

        Ok(Self {
            store,
            project_id: get("PANTRY_PROJECT_ID").unwrap_or_else(|| "pantry".into()),
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
            retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(
            cfg.store,
            StoreBackend::Sqlite {
                path: "pantry.db".into()
            }
        );
        assert_eq!(cfg.project_id, "pantry");
        assert_eq!(cfg.server_host, "0.0.0.0");
        assert_eq!(cfg.server_port, 3000);
        assert_eq!(cfg.cors_allowed_origins, None);
        assert_eq!(cfg.retry.max_attempts, RetryConfig::default().max_attempts);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("PANTRY_STORE", "memory"),
            ("PANTRY_PROJECT_ID", "home"),
            ("PORT", "8080"),
            ("LEDGER_MAX_ATTEMPTS", "0"),
            ("CORS_ALLOWED_ORIGINS", " * "),
        ])
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.project_id, "home");
        assert_eq!(cfg.server_port, 8080);
        assert_eq!(cfg.retry.max_attempts, 1);
        assert_eq!(cfg.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn rejects_unknown_store_and_bad_numbers() {
        assert!(matches!(
            config(&[("PANTRY_STORE", "firestore")]),
            Err(ConfigError::UnknownStore(_))
        ));
        assert!(matches!(
            config(&[("SERVER_PORT", "eighty")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
