//! Runtime configuration read from the environment.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub store: StoreKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/forums".into(),
            listen_addr: "0.0.0.0:4000".into(),
            max_connections: 25,
            acquire_timeout: Duration::from_secs(5),
            store: StoreKind::Postgres,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `LISTEN_ADDR`, `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT_SECS` and `FORUM_STORE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse_number("DB_MAX_CONNECTIONS", &v)?,
            None => defaults.max_connections,
        };
        let acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_number("DB_ACQUIRE_TIMEOUT_SECS", &v)?),
            None => defaults.acquire_timeout,
        };
        let store = match lookup("FORUM_STORE") {
            Some(v) => v.parse()?,
            None => defaults.store,
        };
        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            max_connections,
            acquire_timeout,
            store,
        })
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
