//! Base data type catalog.
//!
//! Declared parameter types recovered from a routine signature are resolved
//! against a closed set of canonical type names. The built-in table is a
//! static `phf` map; callers may inject their own table through the
//! [`TypeCatalog`] trait.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use phf::phf_map;

/// Every base data type the harness recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDataType {
    Number,
    Float,
    Binary,
    Boolean,
    Varchar,
    Date,
    Time,
    TimestampLtz,
    TimestampNtz,
    TimestampTz,
    Variant,
    Object,
    Array,
    Geography,
    Geometry,
    Vector,
    File,
}

impl BaseDataType {
    /// Canonical uppercase name as reported by the engine.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Float => "FLOAT",
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::Varchar => "VARCHAR",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::TimestampLtz => "TIMESTAMP_LTZ",
            Self::TimestampNtz => "TIMESTAMP_NTZ",
            Self::TimestampTz => "TIMESTAMP_TZ",
            Self::Variant => "VARIANT",
            Self::Object => "OBJECT",
            Self::Array => "ARRAY",
            Self::Geography => "GEOGRAPHY",
            Self::Geometry => "GEOMETRY",
            Self::Vector => "VECTOR",
            Self::File => "FILE",
        }
    }
}

impl fmt::Display for BaseDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps canonical type names to their [`BaseDataType`].
///
/// Lookup is exact: names are expected in the engine's uppercase form.
static BASE_TYPES: phf::Map<&'static str, BaseDataType> = phf_map! {
    "NUMBER" => BaseDataType::Number,
    "FLOAT" => BaseDataType::Float,
    "BINARY" => BaseDataType::Binary,
    "BOOLEAN" => BaseDataType::Boolean,
    "VARCHAR" => BaseDataType::Varchar,
    "DATE" => BaseDataType::Date,
    "TIME" => BaseDataType::Time,
    "TIMESTAMP_LTZ" => BaseDataType::TimestampLtz,
    "TIMESTAMP_NTZ" => BaseDataType::TimestampNtz,
    "TIMESTAMP_TZ" => BaseDataType::TimestampTz,
    "VARIANT" => BaseDataType::Variant,
    "OBJECT" => BaseDataType::Object,
    "ARRAY" => BaseDataType::Array,
    "GEOGRAPHY" => BaseDataType::Geography,
    "GEOMETRY" => BaseDataType::Geometry,
    "VECTOR" => BaseDataType::Vector,
    "FILE" => BaseDataType::File,
};

/// A closed, immutable lookup from normalised type name to [`BaseDataType`].
pub trait TypeCatalog {
    /// Resolve `name`, returning `None` when the catalog has no such entry.
    fn lookup(&self, name: &str) -> Option<BaseDataType>;
}

/// The catalog of every [`BaseDataType`] under its canonical name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Iterate over the canonical names known to the built-in catalog.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BASE_TYPES.keys().copied()
    }
}

impl TypeCatalog for BuiltinCatalog {
    fn lookup(&self, name: &str) -> Option<BaseDataType> {
        BASE_TYPES.get(name).copied()
    }
}

impl<S: BuildHasher> TypeCatalog for HashMap<String, BaseDataType, S> {
    fn lookup(&self, name: &str) -> Option<BaseDataType> {
        self.get(name).copied()
    }
}

impl<S: BuildHasher> TypeCatalog for HashMap<&str, BaseDataType, S> {
    fn lookup(&self, name: &str) -> Option<BaseDataType> {
        self.get(name).copied()
    }
}

impl<C: TypeCatalog + ?Sized> TypeCatalog for &C {
    fn lookup(&self, name: &str) -> Option<BaseDataType> {
        (**self).lookup(name)
    }
}
