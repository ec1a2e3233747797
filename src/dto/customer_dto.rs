use serde::{Deserialize, Serialize};

use crate::models::customer::{Customer, NewCustomer};

// Request para registrar un cliente. Sin validación: lo que falte se guarda como NULL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        Self {
            name: request.name,
            contact: request.contact,
        }
    }
}

// Response de cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            contact: customer.contact,
        }
    }
}
