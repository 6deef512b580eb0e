//! Router assembly.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::customer_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Mount point of the customer API.
pub const API_PREFIX: &str = "/api/v1";
pub const CUSTOMERS_PATH: &str = "/customers";

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: common routes at the root, customer API under /api/v1.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(API_PREFIX, customer_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
