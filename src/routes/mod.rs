pub mod booking_routes;
pub mod customer_routes;
pub mod health_routes;
pub mod vehicle_routes;
