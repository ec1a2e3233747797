use std::sync::Arc;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        tracing::debug!("🚗 {} vehículos encontrados", vehicles.len());

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }
}
