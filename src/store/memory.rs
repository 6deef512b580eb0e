//! In-process customer store with the same email uniqueness the database constraint gives.

use super::{persisted_id, CustomerStore};
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Rows {
    last_id: i32,
    by_id: BTreeMap<i32, Customer>,
}

impl Rows {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.by_id
            .values()
            .any(|c| c.email == email && c.id != except)
    }
}

#[derive(Default)]
pub struct MemoryCustomerStore {
    rows: RwLock<Rows>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Rows> {
        self.rows.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Rows> {
        self.rows.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.read().by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.read().by_id.get(&id).cloned())
    }

    async fn insert(&self, customer: &Customer) -> Result<Customer, AppError> {
        let mut rows = self.write();
        if rows.email_taken(&customer.email, None) {
            return Err(AppError::DuplicateEmail(customer.email.clone()));
        }
        rows.last_id += 1;
        let id = rows.last_id;
        let stored = customer.clone().with_id(id);
        rows.by_id.insert(id, stored.clone());
        Ok(stored)
    }

    async fn overwrite(&self, customer: &Customer) -> Result<(), AppError> {
        let id = persisted_id(customer)?;
        let mut rows = self.write();
        if !rows.by_id.contains_key(&id) {
            return Err(AppError::CustomerNotFound(id));
        }
        if rows.email_taken(&customer.email, Some(id)) {
            return Err(AppError::DuplicateEmail(customer.email.clone()));
        }
        rows.by_id.insert(id, customer.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.write().by_id.remove(&id);
        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.read().email_taken(email, None))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.read().by_id.contains_key(&id))
    }
}
