//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::environment::parse_or;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let acquire_timeout_secs: u64 = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?;

        Ok(Self {
            url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_is_required() {
        let err = DatabaseConfig::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_pool_defaults() {
        let config = DatabaseConfig::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/vehicle_rental".to_string())
        })
        .unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_pool_overrides() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://db/rental".to_string()),
            "DB_MAX_CONNECTIONS" => Some("4".to_string()),
            "DB_ACQUIRE_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }
}
