//! Reassembly of structured metadata from flat result rows.
//!
//! Metadata listings return one row per key column or per property. The
//! functions here validate that the expected columns are present and fold
//! the rows back into ordered keys, foreign key descriptors and property
//! trees. Ordering always comes from an explicit sequence column, never from
//! row arrival order.

mod keys;
mod properties;
mod rows;

pub use keys::{
    ForeignKeyDescriptor, ReferencedTable, foreign_key_descriptors, grouped_column_lists,
    ordered_column_list, primary_key_columns, unique_key_columns,
};
pub use properties::{PropertyTree, nested_property_tree};
pub use rows::{find_row, keyed_rows, project_columns, property_values};

/// Column names used by key and foreign key listings.
pub mod columns {
    /// 1-based position of a column within its key.
    pub const KEY_SEQUENCE: &str = "key_sequence";
    /// Key column name in primary and unique key listings.
    pub const COLUMN_NAME: &str = "column_name";
    /// Unique constraint a key column belongs to.
    pub const CONSTRAINT_NAME: &str = "constraint_name";
    /// Foreign key constraint a row belongs to.
    pub const FK_NAME: &str = "fk_name";
    /// Referencing column on the foreign key side.
    pub const FK_COLUMN_NAME: &str = "fk_column_name";
    /// Database of the referenced table.
    pub const PK_DATABASE_NAME: &str = "pk_database_name";
    /// Schema of the referenced table.
    pub const PK_SCHEMA_NAME: &str = "pk_schema_name";
    /// Name of the referenced table.
    pub const PK_TABLE_NAME: &str = "pk_table_name";
    /// Referenced column paired with `fk_column_name`.
    pub const PK_COLUMN_NAME: &str = "pk_column_name";
}
