use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::booking::{compute_total_rent, Booking, BookingDetail, NewBooking};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings unidos con cliente y vehículo. Los que no resuelven
    /// alguna de las dos referencias quedan fuera (INNER JOIN).
    async fn find_all_detailed(&self) -> AppResult<Vec<BookingDetail>>;

    /// Lee la tarifa del vehículo, calcula el total e inserta el booking.
    ///
    /// Devuelve `Ok(None)` sin insertar nada si el vehículo no existe.
    /// No se comprueba que `customer_id` exista.
    async fn create(&self, booking: NewBooking) -> AppResult<Option<Booking>>;
}

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_all_detailed(&self) -> AppResult<Vec<BookingDetail>> {
        let bookings = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT b.id, c.name AS customer, v.name AS vehicle, b.days, b.total_rent
            FROM bookings b
            JOIN customers c ON b.customer_id = c.id
            JOIN vehicles v ON b.vehicle_id = v.id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn create(&self, booking: NewBooking) -> AppResult<Option<Booking>> {
        let mut tx = self.pool.begin().await?;

        // FOR SHARE bloquea cambios de tarifa hasta el commit
        let rent_per_day: Option<Decimal> =
            sqlx::query_scalar("SELECT rent_per_day FROM vehicles WHERE id = $1 FOR SHARE")
                .bind(booking.vehicle_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(rent_per_day) = rent_per_day else {
            tx.rollback().await?;
            return Ok(None);
        };

        let total_rent = compute_total_rent(rent_per_day, booking.days)?;

        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (vehicle_id, customer_id, days, total_rent)
            VALUES ($1, $2, $3, $4)
            RETURNING id, vehicle_id, customer_id, days, total_rent
            "#,
        )
        .bind(booking.vehicle_id)
        .bind(booking.customer_id)
        .bind(booking.days)
        .bind(total_rent)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(created))
    }
}
