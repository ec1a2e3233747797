//! Conexión a PostgreSQL
//!
//! Crea el pool de conexiones y aplica las migraciones del schema.
//! Cada request toma su propia conexión del pool.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool a partir de la configuración
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!("🗄️ Conectando a {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .context("Error conectando a la base de datos")?;

        tracing::info!(
            "✅ Pool de conexiones listo (max {}, min {})",
            config.max_connections,
            config.min_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Error ejecutando migraciones")?;

        tracing::info!("📐 Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar las credenciales de la URL en logs
pub fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.rsplit_once('@') {
        Some((credentials, host)) if credentials.contains(':') => {
            format!("{}://***:***@{}", scheme, host)
        }
        _ => url.to_string(),
    }
}
