//! Flat reshapes of whole listings.
//!
//! Unlike composite keys these need no sorting: rows are either indexed by a
//! name column, reduced to key/value pairs, narrowed to a few columns or
//! searched for a single match.

use indexmap::IndexMap;
use log::debug;

use crate::row::{Key, Row, RowError, Value};

/// Index `rows` by the value of `key_column`.
///
/// Keys keep first-seen order; a later row with the same key replaces the
/// earlier one. Values of different kinds never share a key.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if a row lacks `key_column`.
pub fn keyed_rows(rows: &[Row], key_column: &str) -> Result<IndexMap<Key, Row>, RowError> {
    rows.iter()
        .map(|row| Ok((row.require(key_column)?.to_key(), row.clone())))
        .collect()
}

/// Reduce `rows` to a `key_column -> value_column` mapping.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if a row lacks either column.
pub fn property_values(
    rows: &[Row],
    key_column: &str,
    value_column: &str,
) -> Result<IndexMap<Key, Value>, RowError> {
    rows.iter()
        .map(|row| {
            Ok((
                row.require(key_column)?.to_key(),
                row.require(value_column)?.clone(),
            ))
        })
        .collect()
}

/// Keep only `columns` from every row, in the order given.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if a row lacks one of `columns`.
pub fn project_columns(rows: &[Row], columns: &[&str]) -> Result<Vec<Row>, RowError> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| Ok((*column, row.require(column)?.clone())))
                .collect::<Result<Row, RowError>>()
        })
        .collect()
}

/// Return the first row whose `column` holds the text `expected`.
///
/// Non-text values never match.
///
/// Used for listings that cannot be filtered on the engine side.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if a row scanned before the match
/// lacks `column`.
pub fn find_row<'a>(
    rows: &'a [Row],
    column: &str,
    expected: &str,
) -> Result<Option<&'a Row>, RowError> {
    for row in rows {
        if row.require(column)?.as_text() == Some(expected) {
            return Ok(Some(row));
        }
    }
    debug!("no row with {column} = {expected:?} among {} rows", rows.len());
    Ok(None)
}
