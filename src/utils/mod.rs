//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores común a todas las capas.

pub mod errors;

pub use errors::{AppError, AppResult};
