//! Modelo de Customer

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Customer - mapea a la tabla customers. `name` y `contact` admiten NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: Option<String>,
    pub contact: Option<String>,
}

/// Datos para insertar un cliente; el id lo asigna el almacenamiento
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub contact: Option<String>,
}
