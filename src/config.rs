//! Server settings read from the environment (and `.env` via dotenvy).

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data.db";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read `DATABASE_URL` and `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.database_url),
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite:/var/lib/wellnex.db"),
            ("RUST_LOG", "wellnex=debug"),
        ]));
        assert_eq!(config.database_url, "sqlite:/var/lib/wellnex.db");
        assert_eq!(config.log_filter, "wellnex=debug");
    }

    #[test]
    fn empty_database_url_uses_default() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "")]));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
