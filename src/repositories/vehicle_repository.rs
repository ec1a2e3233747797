use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

/// Acceso de solo lectura a la tabla vehicles
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Todos los vehículos, ordenados por id
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, name, vehicle_type, rent_per_day FROM vehicles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
