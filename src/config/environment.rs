//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor. Todas las variables
//! tienen valor por defecto; un valor presente pero inválido es un error.

use std::str::FromStr;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            run_migrations: true,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", defaults.run_migrations)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log para el subscriber; un valor desconocido cae en INFO
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

/// Lee y parsea una variable, usando `default` si no está definida
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
        assert!(config.cors_origins.is_empty());
        assert!(config.run_migrations);
        assert!(config.is_development());
    }

    #[test]
    fn test_reads_overrides() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("RUN_MIGRATIONS", "false"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert!(!config.is_development());
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.run_migrations);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = EnvironmentConfig {
            log_level: "loud".to_string(),
            ..EnvironmentConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }
}
