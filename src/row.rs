//! Flat result rows.
//!
//! A [`Row`] is an ordered mapping from column name to a scalar [`Value`],
//! as produced by a single result set. Rows are immutable once built;
//! aggregation code reads them through the `require_*` accessors so a
//! missing column surfaces as [`RowError::MalformedRow`] at the boundary.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap};
use thiserror::Error;

/// A scalar cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Borrow the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return the integer payload, if any.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Total order used for sort keys.
    ///
    /// `Null` sorts first, then booleans, numbers and text. Integers and
    /// floats compare numerically with each other.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            #[expect(
                clippy::cast_precision_loss,
                reason = "sequence positions are far below 2^53"
            )]
            (Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            #[expect(
                clippy::cast_precision_loss,
                reason = "sequence positions are far below 2^53"
            )]
            (Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// The value as a grouping or map key.
    ///
    /// Distinct values give distinct keys: `Null` is not the empty string
    /// and `Integer(1)` is not `Text("1")`.
    #[must_use]
    pub fn to_key(&self) -> Key {
        match self {
            Self::Null => Key::Null,
            Self::Bool(b) => Key::Bool(*b),
            Self::Integer(i) => Key::Integer(*i),
            Self::Float(x) => Key::Float(x.to_bits()),
            Self::Text(s) => Key::Text(s.clone()),
        }
    }
}

/// A hashable form of [`Value`] used to key groups and maps.
///
/// Floats are keyed by their bit pattern. A text key can be looked up with a
/// plain `&str`:
///
/// ```
/// use ddlcheck::row::{Key, Value};
/// use indexmap::IndexMap;
///
/// let mut map = IndexMap::new();
/// map.insert(Value::from("URL").to_key(), 1);
/// map.insert(Value::Null.to_key(), 2);
/// assert_eq!(map.get("URL"), Some(&1));
/// assert_eq!(map.get(&Key::Null), Some(&2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Null,
    Bool(bool),
    Integer(i64),
    Float(u64),
    Text(String),
}

impl Key {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Text hashes exactly like `str` so `&str` lookups find `Key::Text`.
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Text(s) => s.hash(state),
            Self::Null => state.write_u8(0),
            Self::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Self::Integer(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Self::Float(bits) => {
                state.write_u8(3);
                bits.hash(state);
            }
        }
    }
}

impl Equivalent<Key> for str {
    fn equivalent(&self, key: &Key) -> bool {
        key.as_text() == Some(self)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Errors raised when a row does not have the shape an operation expects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// A required column is absent, or holds a value of the wrong kind.
    #[error("malformed row: column `{column}` {problem} in {row}")]
    MalformedRow {
        column: String,
        problem: &'static str,
        row: Row,
    },
}

impl RowError {
    fn missing(row: &Row, column: &str) -> Self {
        Self::MalformedRow {
            column: column.to_string(),
            problem: "is missing",
            row: row.clone(),
        }
    }

    fn wrong_kind(row: &Row, column: &str, problem: &'static str) -> Self {
        Self::MalformedRow {
            column: column.to_string(),
            problem,
            row: row.clone(),
        }
    }

    /// The column that triggered the error.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::MalformedRow { column, .. } => column,
        }
    }
}

/// One result-set row with columns in result order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row(IndexMap<String, Value>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column insertion, used when assembling rows by hand.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Borrow `column` or report the row as malformed.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MalformedRow`] if the column is absent.
    pub fn require(&self, column: &str) -> Result<&Value, RowError> {
        self.get(column).ok_or_else(|| RowError::missing(self, column))
    }

    /// Borrow `column` as text.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MalformedRow`] if the column is absent or not text.
    pub fn require_text(&self, column: &str) -> Result<&str, RowError> {
        self.require(column)?
            .as_text()
            .ok_or_else(|| RowError::wrong_kind(self, column, "is not text"))
    }

    /// Read `column` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MalformedRow`] if the column is absent or not an
    /// integer.
    pub fn require_integer(&self, column: &str) -> Result<i64, RowError> {
        self.require(column)?
            .as_integer()
            .ok_or_else(|| RowError::wrong_kind(self, column, "is not an integer"))
    }

    /// Column names in result order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (column, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests;
