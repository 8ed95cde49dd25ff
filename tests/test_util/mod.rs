//! Shared test utilities for integration tests.
//!
//! These helpers build listing rows the way the engine returns them. They
//! mirror a subset of the `ddlcheck::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

use ddlcheck::{Row, Value};

/// Build a row from `(column, value)` pairs in result order.
///
/// # Examples
///
/// ```
/// use test_util::row;
/// use ddlcheck::Value;
///
/// let r = row(&[("name", Value::from("ID"))]);
/// assert_eq!(r.len(), 1);
/// ```
#[must_use]
pub fn row(cells: &[(&str, Value)]) -> Row {
    cells
        .iter()
        .map(|(column, value)| (*column, value.clone()))
        .collect()
}

/// A `SHOW IMPORTED KEYS` row.
#[must_use]
pub fn imported_key(
    fk_name: &str,
    key_sequence: i64,
    fk_column: &str,
    pk_table: (&str, &str, &str),
    pk_column: &str,
) -> Row {
    let (database, schema, table) = pk_table;
    row(&[
        ("created_on", Value::Null),
        ("pk_database_name", database.into()),
        ("pk_schema_name", schema.into()),
        ("pk_table_name", table.into()),
        ("pk_column_name", pk_column.into()),
        ("fk_database_name", "TEST_DB".into()),
        ("fk_schema_name", "TEST_SCHEMA".into()),
        ("fk_table_name", "LINES".into()),
        ("fk_column_name", fk_column.into()),
        ("key_sequence", key_sequence.into()),
        ("fk_name", fk_name.into()),
        ("pk_name", "PK".into()),
    ])
}

/// A `SHOW UNIQUE KEYS` / `SHOW PRIMARY KEYS` row.
#[must_use]
pub fn key_column(constraint: &str, key_sequence: i64, column: &str) -> Row {
    row(&[
        ("created_on", Value::Null),
        ("database_name", "TEST_DB".into()),
        ("schema_name", "TEST_SCHEMA".into()),
        ("table_name", "ORDERS".into()),
        ("column_name", column.into()),
        ("key_sequence", key_sequence.into()),
        ("constraint_name", constraint.into()),
    ])
}

/// A `DESC STAGE` row.
#[must_use]
pub fn stage_property(parent: &str, property: &str, value: &str) -> Row {
    row(&[
        ("parent_property", parent.into()),
        ("property", property.into()),
        ("property_type", "String".into()),
        ("property_value", value.into()),
        ("property_default", "".into()),
    ])
}
