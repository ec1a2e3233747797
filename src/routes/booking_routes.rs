use axum::{extract::rejection::JsonRejection, extract::State, routing::get, Json, Router};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, CreateBookingResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.bookings.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let Json(request) = payload?;
    let controller = BookingController::new(state.bookings.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
