use std::sync::Arc;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, CreateBookingResponse};
use crate::models::booking::NewBooking;
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub const BOOKING_CREATED_MESSAGE: &str = "Booking added successfully!";

pub struct BookingController {
    repository: Arc<dyn BookingRepository>,
}

impl BookingController {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.repository.find_all_detailed().await?;
        tracing::debug!("📑 {} bookings encontrados", bookings.len());

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, AppError> {
        // Solo se comprueba presencia; customer_id puede faltar
        let vehicle_id = request
            .vehicle_id
            .ok_or_else(|| bad_request_error("vehicle_id is required"))?;
        let days = request
            .days
            .ok_or_else(|| bad_request_error("days is required"))?;
        let days = i32::try_from(days).map_err(|_| bad_request_error("days is out of range"))?;

        let booking = self
            .repository
            .create(NewBooking {
                vehicle_id,
                customer_id: request.customer_id,
                days,
            })
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        tracing::info!(
            "✅ Booking {} creado: vehículo {}, {} días, total {}",
            booking.id,
            booking.vehicle_id,
            booking.days,
            booking.total_rent
        );

        Ok(CreateBookingResponse {
            message: BOOKING_CREATED_MESSAGE.to_string(),
            total_rent: booking.total_rent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::Vehicle;
    use crate::repositories::memory::InMemoryStore;
    use rust_decimal::Decimal;

    fn controller_with_sedan() -> (Arc<InMemoryStore>, BookingController) {
        let store = Arc::new(InMemoryStore::with_vehicles(vec![Vehicle::new(
            1,
            "Sedan",
            Decimal::new(5000, 2),
        )]));
        (store.clone(), BookingController::new(store))
    }

    #[tokio::test]
    async fn test_create_returns_total() {
        let (_, controller) = controller_with_sedan();
        let response = controller
            .create(CreateBookingRequest {
                vehicle_id: Some(1),
                customer_id: Some(7),
                days: Some(3),
            })
            .await
            .unwrap();
        assert_eq!(response.message, BOOKING_CREATED_MESSAGE);
        assert_eq!(response.total_rent.to_string(), "150.00");
    }

    #[tokio::test]
    async fn test_missing_days_is_bad_request_without_insert() {
        let (store, controller) = controller_with_sedan();
        let err = controller
            .create(CreateBookingRequest {
                vehicle_id: Some(1),
                customer_id: Some(7),
                days: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.booking_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_days_outside_i32_is_bad_request() {
        let (_, controller) = controller_with_sedan();
        let err = controller
            .create(CreateBookingRequest {
                vehicle_id: Some(1),
                customer_id: None,
                days: Some(i64::from(i32::MAX) + 1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_unknown_vehicle_is_not_found() {
        let (store, controller) = controller_with_sedan();
        let err = controller
            .create(CreateBookingRequest {
                vehicle_id: Some(2),
                customer_id: Some(1),
                days: Some(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Vehicle not found"));
        assert_eq!(store.booking_count().unwrap(), 0);
    }
}
