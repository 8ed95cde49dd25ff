//! Composite keys rebuilt from one-row-per-column listings.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use super::columns::{
    COLUMN_NAME, CONSTRAINT_NAME, FK_COLUMN_NAME, FK_NAME, KEY_SEQUENCE, PK_COLUMN_NAME,
    PK_DATABASE_NAME, PK_SCHEMA_NAME, PK_TABLE_NAME,
};
use crate::row::{Key, Row, RowError, Value};

/// Three-part name of the table a foreign key points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferencedTable {
    pub database: String,
    pub schema: String,
    pub table: String,
}

impl fmt::Display for ReferencedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// One foreign key constraint.
///
/// `columns` and `ref_columns` have equal length and are aligned by key
/// sequence: `columns[i]` references `ref_columns[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDescriptor {
    pub name: String,
    pub columns: Vec<String>,
    pub ref_table: ReferencedTable,
    pub ref_columns: Vec<String>,
}

/// Stable ascending sort of `(position, item)` pairs, keeping the items.
fn sort_by_position<T>(mut entries: Vec<(&Value, T)>) -> Vec<T> {
    entries.sort_by(|a, b| a.0.sort_cmp(b.0));
    entries.into_iter().map(|(_, item)| item).collect()
}

/// Partition `rows` by `group_key` in first-seen order, each group sorted by
/// `sort_key`.
///
/// Each group is returned with the first value seen for its key.
fn groups_by_position<'a>(
    rows: &'a [Row],
    group_key: &str,
    sort_key: &str,
) -> Result<Vec<(&'a Value, Vec<&'a Row>)>, RowError> {
    let mut groups: IndexMap<Key, (&Value, Vec<(&Value, &Row)>)> = IndexMap::new();
    for row in rows {
        let group = row.require(group_key)?;
        let position = row.require(sort_key)?;
        groups
            .entry(group.to_key())
            .or_insert_with(|| (group, Vec::new()))
            .1
            .push((position, row));
    }
    Ok(groups
        .into_values()
        .map(|(group, members)| (group, sort_by_position(members)))
        .collect())
}

/// Sort `rows` by `sort_key` and project `value_column`.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if any row lacks either column.
pub fn ordered_column_list(
    rows: &[Row],
    sort_key: &str,
    value_column: &str,
) -> Result<Vec<Value>, RowError> {
    let entries = rows
        .iter()
        .map(|row| Ok((row.require(sort_key)?, row.require(value_column)?.clone())))
        .collect::<Result<Vec<_>, RowError>>()?;
    Ok(sort_by_position(entries))
}

/// Group rows by `group_key`, sort each group by `sort_key` and project
/// `value_column`.
///
/// Groups appear in the order their first row arrived.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if any row lacks one of the columns.
pub fn grouped_column_lists(
    rows: &[Row],
    group_key: &str,
    sort_key: &str,
    value_column: &str,
) -> Result<Vec<Vec<Value>>, RowError> {
    groups_by_position(rows, group_key, sort_key)?
        .into_iter()
        .map(|(_, group)| {
            group
                .into_iter()
                .map(|row| row.require(value_column).cloned())
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Column names of a primary key in key sequence order.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if `key_sequence` or a textual
/// `column_name` is missing.
pub fn primary_key_columns(rows: &[Row]) -> Result<Vec<String>, RowError> {
    let entries = rows
        .iter()
        .map(|row| {
            Ok((
                row.require(KEY_SEQUENCE)?,
                row.require_text(COLUMN_NAME)?.to_string(),
            ))
        })
        .collect::<Result<Vec<_>, RowError>>()?;
    Ok(sort_by_position(entries))
}

/// Column names of every unique key, one list per constraint.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if `constraint_name`, `key_sequence`
/// or a textual `column_name` is missing.
pub fn unique_key_columns(rows: &[Row]) -> Result<Vec<Vec<String>>, RowError> {
    let keys = groups_by_position(rows, CONSTRAINT_NAME, KEY_SEQUENCE)?
        .into_iter()
        .map(|(_, group)| {
            group
                .into_iter()
                .map(|row| row.require_text(COLUMN_NAME).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("rebuilt {} unique keys from {} rows", keys.len(), rows.len());
    Ok(keys)
}

fn referenced_table(row: &Row) -> Result<ReferencedTable, RowError> {
    Ok(ReferencedTable {
        database: row.require_text(PK_DATABASE_NAME)?.to_string(),
        schema: row.require_text(PK_SCHEMA_NAME)?.to_string(),
        table: row.require_text(PK_TABLE_NAME)?.to_string(),
    })
}

fn text_column(group: &[&Row], column: &str) -> Result<Vec<String>, RowError> {
    group
        .iter()
        .map(|row| row.require_text(column).map(str::to_string))
        .collect()
}

/// Rebuild foreign key descriptors from an imported-keys listing.
///
/// Constraints are listed in ascending `fk_name` order and each is ordered
/// by `key_sequence`. The referenced table comes from the first row of the
/// constraint.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if any expected column is missing or
/// `fk_name` is not text.
pub fn foreign_key_descriptors(rows: &[Row]) -> Result<Vec<ForeignKeyDescriptor>, RowError> {
    let mut groups = groups_by_position(rows, FK_NAME, KEY_SEQUENCE)?;
    groups.sort_by(|a, b| a.0.sort_cmp(b.0));
    let mut descriptors = Vec::with_capacity(groups.len());
    for (_, group) in groups {
        let Some(first) = group.first() else {
            continue;
        };
        descriptors.push(ForeignKeyDescriptor {
            name: first.require_text(FK_NAME)?.to_string(),
            columns: text_column(&group, FK_COLUMN_NAME)?,
            ref_table: referenced_table(first)?,
            ref_columns: text_column(&group, PK_COLUMN_NAME)?,
        });
    }
    debug!(
        "rebuilt {} foreign keys from {} rows",
        descriptors.len(),
        rows.len()
    );
    Ok(descriptors)
}
