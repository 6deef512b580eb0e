//! Customer service: customer CRUD over a REST API with interchangeable PostgreSQL or in-memory storage.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use db::{apply_migrations, ensure_database_exists};
pub use error::{AppError, ConfigError};
pub use model::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
pub use routes::{app, common_routes, customer_routes};
pub use seed::seed_customers;
pub use service::CustomerService;
pub use state::AppState;
pub use store::{open_store, CustomerStore, MemoryCustomerStore, QueryCustomerStore, SqlCustomerStore};
