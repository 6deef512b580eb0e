//! Shared application state for all routes.

use crate::config::StoreKind;
use crate::service::CustomerService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    /// Backend behind `customers`, reported by /ready and /info.
    pub store: StoreKind,
    /// Present for PostgreSQL-backed stores; used by the readiness check.
    pub pool: Option<PgPool>,
}
