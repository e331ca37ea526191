// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    db_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_db_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL`
    /// is required on purpose: the store credentials live in the
    /// deployment environment, never in code defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        if !database_url.starts_with("mysql://") {
            return Err(ConfigError::Invalid(
                "DATABASE_URL must be a mysql:// URL".into(),
            ));
        }

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_else(default_db_max_connections);

        Ok(Self {
            database_url,
            listen_addr,
            db_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }
}
