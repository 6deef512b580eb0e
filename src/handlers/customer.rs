//! Customer CRUD handlers.

use crate::error::AppError;
use crate::model::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    Ok(Json(state.customers.list_all().await?))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(state.customers.get_by_id(customer_id).await?))
}

pub async fn register_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerRegistrationRequest>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(state.customers.register(request).await?))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    Json(request): Json<CustomerUpdateRequest>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(state.customers.update_by_id(customer_id, request).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customers.delete_by_id(customer_id).await?;
    Ok(StatusCode::OK)
}
