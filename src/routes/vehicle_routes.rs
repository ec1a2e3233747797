use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/vehicles", get(list_vehicles))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
