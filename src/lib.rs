//! Library crate for ddlcheck.
//!
//! Decomposes routine signatures into declared parameter types and
//! reassembles composite metadata (keys, property trees) from flat result
//! rows returned by a database engine's describe and show commands.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod edition;
pub mod error;
pub mod row;
pub mod signature;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use aggregate::{
    ForeignKeyDescriptor, PropertyTree, ReferencedTable, foreign_key_descriptors,
    grouped_column_lists, nested_property_tree, ordered_column_list,
};
pub use catalog::{BaseDataType, BuiltinCatalog, TypeCatalog};
pub use edition::Edition;
pub use error::{Error, Result};
pub use row::{Key, Row, RowError, Value};
pub use signature::{SignatureError, parse_parameter_types, split_top_level};
