//! Customer store whose statements are generated from the `Record` mapping.

use super::{persisted_id, CustomerStore};
use crate::error::AppError;
use crate::model::Customer;
use crate::sql::{self, BindValue, QueryBuf, Record, Table};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgQueryResult, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

impl Record for Customer {
    const TABLE: Table = Table {
        schema: "public",
        name: "customer",
        pk: "id",
        columns: &["id", "name", "email", "age"],
    };

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", self.name.clone().into()),
            ("email", self.email.clone().into()),
            ("age", self.age.into()),
        ]
    }
}

#[derive(Clone)]
pub struct QueryCustomerStore {
    pool: PgPool,
}

impl QueryCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many<R: Record>(&self, q: &QueryBuf) -> Result<Vec<R>, AppError> {
        let rows: Vec<PgRow> = bind_all(q).fetch_all(&self.pool).await?;
        rows.iter().map(R::from_row).collect()
    }

    async fn fetch_optional<R: Record>(&self, q: &QueryBuf) -> Result<Option<R>, AppError> {
        let row = bind_all(q).fetch_optional(&self.pool).await?;
        row.as_ref().map(R::from_row).transpose()
    }

    async fn execute(&self, q: &QueryBuf) -> Result<PgQueryResult, sqlx::Error> {
        bind_all(q).execute(&self.pool).await
    }

    async fn exists(&self, q: &QueryBuf) -> Result<bool, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, bool>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_one(&self.pool).await?)
    }
}

fn bind_all(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

#[async_trait]
impl CustomerStore for QueryCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        self.fetch_many(&sql::select_all(&Customer::TABLE)).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        self.fetch_optional(&sql::select_by_id(&Customer::TABLE, id)).await
    }

    async fn insert(&self, customer: &Customer) -> Result<Customer, AppError> {
        let q = sql::insert(&Customer::TABLE, customer.values());
        let row = bind_all(&q)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, &customer.email))?;
        Customer::from_row(&row)
    }

    async fn overwrite(&self, customer: &Customer) -> Result<(), AppError> {
        let id = persisted_id(customer)?;
        let q = sql::update(&Customer::TABLE, id, customer.values());
        let result = self
            .execute(&q)
            .await
            .map_err(|e| AppError::from_write(e, &customer.email))?;
        if result.rows_affected() == 0 {
            return Err(AppError::CustomerNotFound(id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.execute(&sql::delete(&Customer::TABLE, id)).await?;
        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.exists(&sql::select_exists(&Customer::TABLE, "email", email.into()))
            .await
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        self.exists(&sql::select_exists(&Customer::TABLE, Customer::TABLE.pk, id.into()))
            .await
    }
}
