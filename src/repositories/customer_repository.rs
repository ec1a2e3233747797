use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::customer::{Customer, NewCustomer};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Todos los clientes, ordenados por id
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Inserta un cliente; el id lo asigna el almacenamiento
    async fn create(&self, customer: NewCustomer) -> AppResult<Customer>;
}

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT id, name, contact FROM customers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, contact)
            VALUES ($1, $2)
            RETURNING id, name, contact
            "#,
        )
        .bind(customer.name)
        .bind(customer.contact)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
