use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub rent_per_day: Decimal,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            rent_per_day: vehicle.rent_per_day,
        }
    }
}
