//! API de alquiler de vehículos
//!
//! Expone vehículos, clientes y bookings sobre HTTP. El total de cada
//! booking se calcula al crearlo (`rent_per_day × days`) y se guarda.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer_for;
use state::AppState;

/// Crear el router principal de la API
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer_for(&state.config.cors_origins);

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .merge(routes::vehicle_routes::create_vehicle_router())
        .merge(routes::customer_routes::create_customer_router())
        .merge(routes::booking_routes::create_booking_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
