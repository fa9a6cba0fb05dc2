use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown repository type: {0}")]
    UnknownRepository(String),
}

/// Which `CompanyRepository` adapter the service runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RepositoryKind {
    InMemory,
    Postgres,
}

impl FromStr for RepositoryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "memory" | "test" => Ok(RepositoryKind::InMemory),
            "postgres" | "postgresql" => Ok(RepositoryKind::Postgres),
            other => Err(ConfigError::UnknownRepository(other.to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    /// Full URL; takes precedence over the individual parts
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Build database URL from configuration
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.database
            ),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "companies".to_string(),
            max_connections: 10,
            url: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub log_level: String,
    pub enable_jaeger: bool,
    pub jaeger_endpoint: Option<String>,
    pub repository: RepositoryKind,
    pub database: DatabaseConfig,
    /// Offset applied when formatting timestamps for display
    pub display_utc_offset_hours: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            enable_jaeger: false,
            jaeger_endpoint: None,
            repository: RepositoryKind::InMemory,
            database: DatabaseConfig::default(),
            display_utc_offset_hours: -3,
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load from an explicit variable map; unset keys keep their defaults
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty());

        let repository = match get("REPOSITORY_TYPE") {
            Some(value) => value.parse()?,
            None => defaults.repository,
        };

        Ok(Self {
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            log_level: get("RUST_LOG").cloned().unwrap_or(defaults.log_level),
            enable_jaeger: parse_or(get("ENABLE_JAEGER"), "ENABLE_JAEGER", defaults.enable_jaeger)?,
            jaeger_endpoint: get("JAEGER_ENDPOINT").cloned(),
            repository,
            database: DatabaseConfig {
                max_connections: parse_or(
                    get("DATABASE_MAX_CONNECTIONS"),
                    "DATABASE_MAX_CONNECTIONS",
                    defaults.database.max_connections,
                )?,
                url: get("DATABASE_URL").cloned(),
                ..defaults.database
            },
            display_utc_offset_hours: parse_or(
                get("DISPLAY_UTC_OFFSET_HOURS"),
                "DISPLAY_UTC_OFFSET_HOURS",
                defaults.display_utc_offset_hours,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(value: Option<&String>, key: &str, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}
