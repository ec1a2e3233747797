//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL de `migrations/`.

pub mod booking;
pub mod customer;
pub mod vehicle;

pub use booking::{Booking, BookingDetail, NewBooking};
pub use customer::{Customer, NewCustomer};
pub use vehicle::Vehicle;
