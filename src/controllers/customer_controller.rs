use std::sync::Arc;

use crate::dto::common_dto::MessageResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;

pub const CUSTOMER_CREATED_MESSAGE: &str = "Customer added successfully!";

pub struct CustomerController {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerController {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;
        tracing::debug!("👤 {} clientes encontrados", customers.len());

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    /// Registra el cliente tal como llega; no se devuelve el id creado
    pub async fn create(&self, request: CreateCustomerRequest) -> Result<MessageResponse, AppError> {
        let customer = self.repository.create(request.into()).await?;
        tracing::info!("✅ Cliente registrado con id {}", customer.id);

        Ok(MessageResponse::new(CUSTOMER_CREATED_MESSAGE))
    }
}
