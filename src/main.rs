use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use vehicle_rental::build_router;
use vehicle_rental::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚗 Vehicle Rental API ({})", config.environment);
    info!("====================");

    if config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️ Modo desarrollo: CORS abierto, define CORS_ORIGINS fuera de desarrollo");
    }

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    if config.run_migrations {
        db_connection.run_migrations().await?;
    }

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_addr()))?;

    if config.cors_origins.is_empty() {
        info!("🌍 CORS abierto a cualquier origen");
    } else {
        info!("🌍 CORS limitado a: {}", config.cors_origins.join(", "));
    }

    let app_state = AppState::new(db_connection.pool().clone(), config);
    let app = build_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   GET  /customers - Listar clientes");
    info!("   POST /customers - Registrar cliente");
    info!("   GET  /bookings - Listar bookings");
    info!("   POST /bookings - Crear booking");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo escuchar en {}", addr))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
