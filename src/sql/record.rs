//! Row mapping for entities persisted through the statement builder.

use crate::error::AppError;
use crate::sql::{BindValue, Table};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::postgres::PgRow;

/// An entity stored in one table. Rows are decoded column-by-column into JSON and then
/// deserialized, so column names must match the entity's serde field names.
pub trait Record: DeserializeOwned + Send + Sync {
    const TABLE: Table;

    fn id(&self) -> Option<i32>;

    /// Column values to write, primary key excluded.
    fn values(&self) -> Vec<(&'static str, BindValue)>;

    fn from_row(row: &PgRow) -> Result<Self, AppError> {
        Self::from_json(row_to_json(row))
    }

    /// A row that does not fit the entity is a decode error, not a client error.
    fn from_json(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value).map_err(|e| AppError::Db(sqlx::Error::Decode(Box::new(e))))
    }
}

fn row_to_json(row: &PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
