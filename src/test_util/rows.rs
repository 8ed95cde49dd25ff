//! Builders for listing rows.

use crate::aggregate::columns::{
    COLUMN_NAME, CONSTRAINT_NAME, FK_COLUMN_NAME, FK_NAME, KEY_SEQUENCE, PK_COLUMN_NAME,
    PK_DATABASE_NAME, PK_SCHEMA_NAME, PK_TABLE_NAME,
};
use crate::row::{Row, Value};

/// A primary key listing row.
#[must_use]
pub fn key_row(sequence: i64, column: &str) -> Row {
    Row::new()
        .with(CONSTRAINT_NAME, "PK")
        .with(KEY_SEQUENCE, sequence)
        .with(COLUMN_NAME, column)
}

/// A unique key listing row for `constraint`.
#[must_use]
pub fn unique_row(constraint: &str, sequence: i64, column: &str) -> Row {
    Row::new()
        .with(CONSTRAINT_NAME, constraint)
        .with(KEY_SEQUENCE, sequence)
        .with(COLUMN_NAME, column)
}

/// An imported keys row referencing `DB.SALES.ORDERS`.
#[must_use]
pub fn fk_row(name: &str, sequence: i64, column: &str, ref_column: &str) -> Row {
    Row::new()
        .with(PK_DATABASE_NAME, "DB")
        .with(PK_SCHEMA_NAME, "SALES")
        .with(PK_TABLE_NAME, "ORDERS")
        .with(PK_COLUMN_NAME, ref_column)
        .with(FK_NAME, name)
        .with(FK_COLUMN_NAME, column)
        .with(KEY_SEQUENCE, sequence)
}

/// A stage describe row.
#[must_use]
pub fn stage_row(parent: &str, property: &str, value: &str) -> Row {
    Row::new()
        .with("parent_property", parent)
        .with("property", property)
        .with("property_type", "String")
        .with("property_value", value)
        .with("property_default", Value::Null)
}
