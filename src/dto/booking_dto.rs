use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::common_dto::lenient_int;
use crate::models::booking::BookingDetail;

// Request para crear un booking. Los tres campos aceptan número o string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default, deserialize_with = "lenient_int")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub days: Option<i64>,
}

// Response de creación: confirmación más el total calculado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub total_rent: Decimal,
}

// Fila del listado de bookings (vista desnormalizada)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub customer: Option<String>,
    pub vehicle: String,
    pub days: i32,
    pub total_rent: Decimal,
}

impl From<BookingDetail> for BookingResponse {
    fn from(detail: BookingDetail) -> Self {
        Self {
            id: detail.id,
            customer: detail.customer,
            vehicle: detail.vehicle,
            days: detail.days,
            total_rent: detail.total_rent,
        }
    }
}
