//! Crate-level error type.
//!
//! Each module reports its own error enum; [`Error`] gathers them for callers
//! that mix signature parsing and row aggregation in one flow.

use thiserror::Error;

use crate::edition::EditionError;
use crate::row::RowError;
use crate::signature::SignatureError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error(transparent)]
    Row(#[from] RowError),
    #[error(transparent)]
    Edition(#[from] EditionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
