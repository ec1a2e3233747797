//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    BookingRepository, CustomerRepository, InMemoryStore, PgBookingRepository,
    PgCustomerRepository, PgVehicleRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL; los repositorios comparten el pool
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            customers: Arc::new(PgCustomerRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool)),
        }
    }

    /// Estado respaldado por un `InMemoryStore`
    pub fn in_memory(store: Arc<InMemoryStore>, config: EnvironmentConfig) -> Self {
        Self {
            config,
            vehicles: store.clone(),
            customers: store.clone(),
            bookings: store,
        }
    }
}
