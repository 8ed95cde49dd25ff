//! Helpers for building metadata rows and asserting decoding errors in tests.
//!
//! The row builders mirror the column layout of the engine's key and
//! property listings so tests read like captured result sets.

mod assertions;
mod rows;

pub use assertions::{assert_malformed_row, assert_malformed_signature, assert_unknown_type};
pub use rows::{fk_row, key_row, stage_row, unique_row};
