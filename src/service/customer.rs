//! Customer operations with not-found and duplicate-email semantics.

use crate::error::AppError;
use crate::model::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
use crate::service::update::merge_update;
use crate::service::RequestValidator;
use crate::store::CustomerStore;
use std::sync::Arc;

/// Every existence or uniqueness check runs before the store is asked to write.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id))
    }

    /// Insert a new customer. Returns it with the id the store assigned.
    pub async fn register(&self, request: CustomerRegistrationRequest) -> Result<Customer, AppError> {
        RequestValidator::validate_registration(&request)?;
        if self.store.exists_by_email(&request.email).await? {
            return Err(AppError::DuplicateEmail(request.email));
        }
        let customer = self.store.insert(&Customer::from(request)).await?;
        tracing::info!(customer_id = ?customer.id, "customer registered");
        Ok(customer)
    }

    pub async fn update_by_id(&self, id: i32, request: CustomerUpdateRequest) -> Result<Customer, AppError> {
        RequestValidator::validate_update(&request)?;
        let current = self.get_by_id(id).await?;
        let merged = merge_update(self.store.as_ref(), &current, &request).await?;
        self.store.overwrite(&merged).await?;
        tracing::info!(customer_id = id, "customer updated");
        Ok(merged)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::CustomerNotFound(id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(customer_id = id, "customer deleted");
        Ok(())
    }
}
