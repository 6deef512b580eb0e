//! Persistence port for customers and its interchangeable backends.

mod memory;
mod query;
mod sql;

pub use memory::MemoryCustomerStore;
pub use query::QueryCustomerStore;
pub use sql::SqlCustomerStore;

use crate::config::{Settings, StoreKind};
use crate::db::{apply_migrations, connect, ensure_database_exists};
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Read/write contract the service is written against. Implementations hold no business rules
/// beyond what the datastore itself enforces (a unique email).
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError>;

    /// Persist a new customer; any id on the input is ignored. Returns the stored row with its assigned id.
    async fn insert(&self, customer: &Customer) -> Result<Customer, AppError>;

    /// Replace the stored row with the same id.
    async fn overwrite(&self, customer: &Customer) -> Result<(), AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError>;
}

/// Id of a customer that is about to be overwritten.
pub(crate) fn persisted_id(customer: &Customer) -> Result<i32, AppError> {
    customer
        .id
        .ok_or_else(|| AppError::Validation("cannot overwrite a customer without an id".into()))
}

/// Build the store selected in settings. PostgreSQL-backed stores get a migrated pool, which is
/// returned alongside for readiness checks.
pub async fn open_store(settings: &Settings) -> Result<(Arc<dyn CustomerStore>, Option<PgPool>), AppError> {
    if !settings.store.uses_database() {
        tracing::info!("using in-memory customer store");
        return Ok((Arc::new(MemoryCustomerStore::new()), None));
    }

    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(settings).await?;
    apply_migrations(&pool).await?;

    let store: Arc<dyn CustomerStore> = match settings.store {
        StoreKind::Query => Arc::new(QueryCustomerStore::new(pool.clone())),
        _ => Arc::new(SqlCustomerStore::new(pool.clone())),
    };
    tracing::info!(store = ?settings.store, "using PostgreSQL customer store");
    Ok((store, Some(pool)))
}
