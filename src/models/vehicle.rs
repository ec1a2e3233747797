//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles`. Los vehículos se cargan fuera
//! de la API, por eso aquí solo existe la fila de lectura.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub rent_per_day: Decimal,
}

impl Vehicle {
    pub fn new(id: i64, name: impl Into<String>, rent_per_day: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle_type: None,
            rent_per_day,
        }
    }

    pub fn with_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vehicle_serializes_type_and_decimal_as_string() {
        let vehicle = Vehicle::new(1, "Sedan", Decimal::new(5000, 2)).with_type("car");
        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "name": "Sedan", "type": "car", "rent_per_day": "50.00" })
        );
    }
}
