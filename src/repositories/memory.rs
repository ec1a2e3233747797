//! Almacenamiento en memoria
//!
//! Implementa los tres repositorios sobre unas tablas protegidas por un
//! `RwLock`. Se usa en los tests de la API y para levantar el servicio sin
//! PostgreSQL.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::models::booking::{compute_total_rent, Booking, BookingDetail, NewBooking};
use crate::models::customer::{Customer, NewCustomer};
use crate::models::vehicle::Vehicle;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct Tables {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    bookings: Vec<Booking>,
    last_customer_id: i64,
    last_booking_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea el store con vehículos precargados, como haría una carga externa
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let store = Self::default();
        if let Ok(mut tables) = store.tables.write() {
            tables.vehicles = vehicles;
        }
        store
    }

    /// Inserta o reemplaza un vehículo (carga fuera de la API)
    pub fn upsert_vehicle(&self, vehicle: Vehicle) -> AppResult<()> {
        let mut tables = self.write()?;
        match tables.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle,
            None => tables.vehicles.push(vehicle),
        }
        Ok(())
    }

    /// Borra un vehículo sin tocar sus bookings, igual que un borrado externo
    pub fn remove_vehicle(&self, id: i64) -> AppResult<()> {
        self.write()?.vehicles.retain(|v| v.id != id);
        Ok(())
    }

    pub fn bookings(&self) -> AppResult<Vec<Booking>> {
        Ok(self.read()?.bookings.clone())
    }

    pub fn booking_count(&self) -> AppResult<usize> {
        Ok(self.read()?.bookings.len())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("In-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("In-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let mut vehicles = self.read()?.vehicles.clone();
        vehicles.sort_by_key(|v| v.id);
        Ok(vehicles)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        Ok(self.read()?.customers.clone())
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        let mut tables = self.write()?;
        tables.last_customer_id += 1;
        let created = Customer {
            id: tables.last_customer_id,
            name: customer.name,
            contact: customer.contact,
        };
        tables.customers.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_all_detailed(&self) -> AppResult<Vec<BookingDetail>> {
        let tables = self.read()?;
        let details = tables
            .bookings
            .iter()
            .filter_map(|booking| {
                let customer_id = booking.customer_id?;
                let customer = tables.customers.iter().find(|c| c.id == customer_id)?;
                let vehicle = tables.vehicles.iter().find(|v| v.id == booking.vehicle_id)?;
                Some(BookingDetail {
                    id: booking.id,
                    customer: customer.name.clone(),
                    vehicle: vehicle.name.clone(),
                    days: booking.days,
                    total_rent: booking.total_rent,
                })
            })
            .collect();
        Ok(details)
    }

    async fn create(&self, booking: NewBooking) -> AppResult<Option<Booking>> {
        // El write lock cubre lectura de tarifa e inserción
        let mut tables = self.write()?;

        let Some(rent_per_day) = tables
            .vehicles
            .iter()
            .find(|v| v.id == booking.vehicle_id)
            .map(|v| v.rent_per_day)
        else {
            return Ok(None);
        };

        let total_rent = compute_total_rent(rent_per_day, booking.days)?;

        tables.last_booking_id += 1;
        let created = Booking {
            id: tables.last_booking_id,
            vehicle_id: booking.vehicle_id,
            customer_id: booking.customer_id,
            days: booking.days,
            total_rent,
        };
        tables.bookings.push(created.clone());
        Ok(Some(created))
    }
}
