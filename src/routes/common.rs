//! Service-level routes: liveness, readiness of the customer store, build info.

use crate::routes::{API_PREFIX, CUSTOMERS_PATH};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct StoreReadiness {
    status: &'static str,
    store: &'static str,
    /// Only reported for database-backed stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    store: &'static str,
    customers: String,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// 503 when the store's database does not answer; the memory store is always ready.
async fn store_ready(State(state): State<AppState>) -> (StatusCode, Json<StoreReadiness>) {
    let store = state.store.as_str();
    let Some(pool) = &state.pool else {
        return (
            StatusCode::OK,
            Json(StoreReadiness { status: "ok", store, database: None }),
        );
    };
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(StoreReadiness { status: "ok", store, database: Some("ok") }),
        ),
        Err(e) => {
            tracing::warn!(store, error = %e, "customer store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StoreReadiness { status: "degraded", store, database: Some("unavailable") }),
            )
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.as_str(),
        customers: format!("{API_PREFIX}{CUSTOMERS_PATH}"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(store_ready))
        .route("/version", get(version))
        .route("/info", get(info))
        .with_state(state)
}
