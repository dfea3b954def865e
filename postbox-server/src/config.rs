//! Runtime configuration, resolved once at startup.
//!
//! Backend selection is a pure function of process configuration: the
//! embedded backend is chosen when the test/CI flag is set (`--embedded` or
//! `POSTBOX_EMBEDDED`), the networked backend otherwise. Postgres
//! credentials are only required in networked mode.

use std::env;

use thiserror::Error;

/// Development fallback for the flash-signing secret.
pub const DEFAULT_SECRET_KEY: &str = "test_secret_key";

/// Configuration errors surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Postgres connection settings for the networked backend.
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl PgConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: require("PGHOST")?,
            user: require("PGUSER")?,
            password: require("PGPASSWORD")?,
            database: require("PGDATABASE")?,
        })
    }
}

/// Which persistence backend to run against.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Transient in-memory store, used by tests and CI.
    Embedded,
    /// External Postgres reached with the given credentials.
    Networked(PgConfig),
}

impl BackendConfig {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Networked(_) => "networked",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    /// Secret used to sign flash cookies.
    pub secret_key: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// `force_embedded` (the `--embedded` flag) wins over `POSTBOX_EMBEDDED`.
    pub fn from_env(force_embedded: bool) -> Result<Self, ConfigError> {
        let backend = if force_embedded || env_flag("POSTBOX_EMBEDDED") {
            BackendConfig::Embedded
        } else {
            BackendConfig::Networked(PgConfig::from_env()?)
        };

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using development default");
            DEFAULT_SECRET_KEY.to_string()
        });

        Ok(Self {
            backend,
            secret_key,
        })
    }

    /// Embedded-backend configuration with the development secret.
    pub fn embedded() -> Self {
        Self {
            backend: BackendConfig::Embedded,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        }
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Truthy flag: `1`, `true`, or `yes`, case-insensitive.
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
