use axum::{extract::rejection::JsonRejection, extract::State, routing::get, Json, Router};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new().route("/customers", get(list_customers).post(create_customer))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.customers.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let controller = CustomerController::new(state.customers.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
