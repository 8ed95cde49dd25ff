//! Assertions over decoding errors.

use std::fmt::Debug;

use crate::row::RowError;
use crate::signature::{MalformedReason, SignatureError};

/// Assert that `result` failed because `column` was missing or mistyped.
///
/// # Panics
/// Panics if `result` is `Ok` or names a different column.
#[track_caller]
pub fn assert_malformed_row<T: Debug>(result: &Result<T, RowError>, column: &str) {
    match result {
        Err(err) => assert_eq!(err.column(), column, "unexpected error: {err}"),
        Ok(value) => panic!("expected malformed row on `{column}`, got {value:?}"),
    }
}

/// Assert that `result` failed with the given structural reason.
///
/// # Panics
/// Panics if `result` is `Ok` or fails for another reason.
#[track_caller]
pub fn assert_malformed_signature<T: Debug>(
    result: &Result<T, SignatureError>,
    expected: MalformedReason,
) {
    match result {
        Err(SignatureError::MalformedSignature { reason, .. }) => assert_eq!(*reason, expected),
        other => panic!("expected malformed signature ({expected}), got {other:?}"),
    }
}

/// Assert that `result` failed on an unknown `type_name`.
///
/// # Panics
/// Panics if `result` is `Ok` or fails for another reason.
#[track_caller]
pub fn assert_unknown_type<T: Debug>(result: &Result<T, SignatureError>, type_name: &str) {
    match result {
        Err(SignatureError::UnknownDataType { type_name: found, .. }) => {
            assert_eq!(found, type_name);
        }
        other => panic!("expected unknown data type {type_name:?}, got {other:?}"),
    }
}
