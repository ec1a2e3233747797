//! Modelo de Booking
//!
//! Contiene la fila de la tabla `bookings`, la vista desnormalizada que
//! devuelve el listado y el cálculo del total de alquiler.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{bad_request_error, AppResult};

/// Booking - mapea a la tabla bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub vehicle_id: i64,
    pub customer_id: Option<i64>,
    pub days: i32,
    pub total_rent: Decimal,
}

/// Fila del listado: booking unido con el nombre del cliente y del vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookingDetail {
    pub id: i64,
    pub customer: Option<String>,
    pub vehicle: String,
    pub days: i32,
    pub total_rent: Decimal,
}

/// Datos para crear un booking; el total se calcula dentro del repositorio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub vehicle_id: i64,
    pub customer_id: Option<i64>,
    pub days: i32,
}

/// Escala de la columna `bookings.total_rent` (NUMERIC(12,2))
pub const TOTAL_RENT_SCALE: u32 = 2;

/// Límite exclusivo de NUMERIC(12,2): |total| < 10^10
const TOTAL_RENT_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// total_rent = rent_per_day × days, redondeado a 2 decimales como PostgreSQL.
///
/// Se guarda una sola vez al crear el booking; no se recalcula si la tarifa
/// del vehículo cambia después. Un total que no cabe en la columna es 400.
pub fn compute_total_rent(rent_per_day: Decimal, days: i32) -> AppResult<Decimal> {
    let mut total = rent_per_day
        .checked_mul(Decimal::from(days))
        .ok_or_else(|| bad_request_error("total_rent is out of range"))?
        .round_dp_with_strategy(TOTAL_RENT_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if total.abs() >= TOTAL_RENT_LIMIT {
        return Err(bad_request_error("total_rent is out of range"));
    }

    total.rescale(TOTAL_RENT_SCALE);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_total_rent_sedan_three_days() {
        let total = compute_total_rent(Decimal::from_str("50.00").unwrap(), 3).unwrap();
        assert_eq!(total, Decimal::from_str("150.00").unwrap());
        assert_eq!(total.to_string(), "150.00");
    }

    #[test]
    fn test_total_rent_keeps_cents() {
        let total = compute_total_rent(Decimal::from_str("19.99").unwrap(), 7).unwrap();
        assert_eq!(total.to_string(), "139.93");
    }

    #[test]
    fn test_total_rent_zero_days() {
        let total = compute_total_rent(Decimal::from_str("35.50").unwrap(), 0).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_total_rent_limit_matches_column() {
        assert_eq!(TOTAL_RENT_LIMIT, Decimal::from(10_000_000_000_i64));
    }

    #[test]
    fn test_total_rent_rounds_like_postgres() {
        // 0.125 × 3 = 0.375 → 0.38 (mitad hacia afuera)
        let total = compute_total_rent(Decimal::from_str("0.125").unwrap(), 3).unwrap();
        assert_eq!(total.to_string(), "0.38");
        let total = compute_total_rent(Decimal::from_str("10.005").unwrap(), 1).unwrap();
        assert_eq!(total.to_string(), "10.01");
    }

    #[test]
    fn test_total_rent_always_has_two_decimals() {
        let total = compute_total_rent(Decimal::from(50), 3).unwrap();
        assert_eq!(total.to_string(), "150.00");
    }

    #[test]
    fn test_total_rent_column_boundary() {
        let largest = compute_total_rent(Decimal::from_str("9999999999.99").unwrap(), 1).unwrap();
        assert_eq!(largest.to_string(), "9999999999.99");

        let err = compute_total_rent(Decimal::from_str("50.00").unwrap(), 1_000_000_000).unwrap_err();
        assert!(matches!(err, crate::utils::errors::AppError::BadRequest(_)));

        let err = compute_total_rent(Decimal::from_str("50.00").unwrap(), -1_000_000_000).unwrap_err();
        assert!(matches!(err, crate::utils::errors::AppError::BadRequest(_)));

        // 9999999999.995 redondea a 10^10: tampoco cabe
        let err = compute_total_rent(Decimal::from_str("9999999999.995").unwrap(), 1).unwrap_err();
        assert!(matches!(err, crate::utils::errors::AppError::BadRequest(_)));
    }

    #[test]
    fn test_total_rent_overflow_is_bad_request() {
        let err = compute_total_rent(Decimal::MAX, 2).unwrap_err();
        assert!(matches!(err, crate::utils::errors::AppError::BadRequest(_)));
    }
}
