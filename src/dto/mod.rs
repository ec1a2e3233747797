//! DTOs de la API
//!
//! Cuerpos de request y response tipados para cada endpoint.

pub mod booking_dto;
pub mod common_dto;
pub mod customer_dto;
pub mod vehicle_dto;
