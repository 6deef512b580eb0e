//! Customer store over hand-written SQL.

use super::{persisted_id, CustomerStore};
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlCustomerStore {
    pool: PgPool,
}

impl SqlCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for SqlCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = "SELECT id, name, email, age FROM customer ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = "SELECT id, name, email, age FROM customer WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, customer: &Customer) -> Result<Customer, AppError> {
        let sql = "INSERT INTO customer (name, email, age) VALUES ($1, $2, $3) RETURNING id, name, email, age";
        tracing::debug!(sql = %sql, email = %customer.email, "query");
        sqlx::query_as::<_, Customer>(sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, &customer.email))
    }

    async fn overwrite(&self, customer: &Customer) -> Result<(), AppError> {
        let id = persisted_id(customer)?;
        let sql = "UPDATE customer SET name = $1, email = $2, age = $3 WHERE id = $4";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, &customer.email))?;
        if result.rows_affected() == 0 {
            return Err(AppError::CustomerNotFound(id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let sql = "DELETE FROM customer WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let sql = "SELECT EXISTS(SELECT 1 FROM customer WHERE email = $1)";
        tracing::debug!(sql = %sql, email = %email, "query");
        let exists: bool = sqlx::query_scalar(sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let sql = "SELECT EXISTS(SELECT 1 FROM customer WHERE id = $1)";
        tracing::debug!(sql = %sql, id, "query");
        let exists: bool = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
