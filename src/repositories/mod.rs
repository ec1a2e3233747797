//! Repositorios
//!
//! Cada tabla tiene un trait de acceso con su implementación PostgreSQL.
//! `InMemoryStore` implementa los tres sobre memoria.

pub mod booking_repository;
pub mod customer_repository;
pub mod memory;
pub mod vehicle_repository;

pub use booking_repository::{BookingRepository, PgBookingRepository};
pub use customer_repository::{CustomerRepository, PgCustomerRepository};
pub use memory::InMemoryStore;
pub use vehicle_repository::{PgVehicleRepository, VehicleRepository};
