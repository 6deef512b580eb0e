//! Customer CRUD routes, mounted under /api/v1.

use crate::handlers::customer::{
    delete_customer, get_customer, list_customers, register_customer, update_customer,
};
use crate::routes::CUSTOMERS_PATH;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route(CUSTOMERS_PATH, get(list_customers).post(register_customer))
        .route(
            &format!("{CUSTOMERS_PATH}/:customer_id"),
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(state)
}
