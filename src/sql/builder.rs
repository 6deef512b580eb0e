//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a table descriptor.

use crate::sql::BindValue;

/// Static description of a mapped table. Identifiers come from code only, values are always parameters.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub schema: &'static str,
    pub name: &'static str,
    pub pk: &'static str,
    /// All columns in select order, primary key included.
    pub columns: &'static [&'static str],
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn qualified_table(table: &Table) -> String {
    format!("{}.{}", quoted(table.schema), quoted(table.name))
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        qualified_table(table),
        quoted(table.pk)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &Table, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        qualified_table(table),
        quoted(table.pk),
        n
    );
    q
}

/// SELECT EXISTS(...) for rows where `column` equals `value`. Yields a single boolean.
pub fn select_exists(table: &Table, column: &str, value: BindValue) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(value);
    q.sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ${})",
        qualified_table(table),
        quoted(column),
        n
    );
    q
}

/// INSERT the given columns; the primary key is left to its default. Returns all columns.
pub fn insert(table: &Table, values: Vec<(&str, BindValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, val) in values {
        if name == table.pk {
            continue;
        }
        let n = q.push_param(val);
        cols.push(quoted(name));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    );
    q
}

/// UPDATE by id: SET the given columns (primary key skipped).
pub fn update(table: &Table, id: i32, values: Vec<(&str, BindValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, val) in values {
        if name == table.pk {
            continue;
        }
        let n = q.push_param(val);
        sets.push(format!("{} = ${}", quoted(name), n));
    }
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        qualified_table(table),
        sets.join(", "),
        quoted(table.pk),
        id_param
    );
    q
}

/// DELETE by id.
pub fn delete(table: &Table, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        qualified_table(table),
        quoted(table.pk),
        n
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: Table = Table {
        schema: "public",
        name: "people",
        pk: "id",
        columns: &["id", "name", "age"],
    };

    #[test]
    fn select_all_orders_by_primary_key() {
        let q = select_all(&PEOPLE);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "name", "age" FROM "public"."people" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_skips_primary_key_and_returns_row() {
        let q = insert(
            &PEOPLE,
            vec![
                ("id", BindValue::Int(9)),
                ("name", "Ann".into()),
                ("age", 40.into()),
            ],
        );
        assert_eq!(
            q.sql,
            r#"INSERT INTO "public"."people" ("name", "age") VALUES ($1, $2) RETURNING "id", "name", "age""#
        );
        assert_eq!(q.params, vec![BindValue::Text("Ann".into()), BindValue::Int(40)]);
    }

    #[test]
    fn update_binds_id_last() {
        let q = update(&PEOPLE, 3, vec![("name", "Bo".into()), ("age", 7.into())]);
        assert_eq!(
            q.sql,
            r#"UPDATE "public"."people" SET "name" = $1, "age" = $2 WHERE "id" = $3"#
        );
        assert_eq!(q.params.last(), Some(&BindValue::Int(3)));
    }

    #[test]
    fn exists_and_delete_are_parameterized() {
        let q = select_exists(&PEOPLE, "name", "x'; DROP TABLE people; --".into());
        assert_eq!(
            q.sql,
            r#"SELECT EXISTS(SELECT 1 FROM "public"."people" WHERE "name" = $1)"#
        );
        let q = delete(&PEOPLE, 1);
        assert_eq!(q.sql, r#"DELETE FROM "public"."people" WHERE "id" = $1"#);
        assert_eq!(q.params, vec![BindValue::Int(1)]);
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
    }
}
