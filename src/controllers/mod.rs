//! Controladores
//!
//! Pasos de negocio de cada recurso entre las rutas y los repositorios.

pub mod booking_controller;
pub mod customer_controller;
pub mod vehicle_controller;
