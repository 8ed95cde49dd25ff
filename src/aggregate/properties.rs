//! Two-level property trees.
//!
//! Describe commands for stages and similar objects return one row per
//! property, tagged with the parent property it belongs to. The tree folds
//! those rows into `parent -> property -> row`.

use indexmap::IndexMap;
use log::warn;

use crate::row::{Key, Row, RowError};

/// Parent property to (property to full source row).
///
/// Text keys can be looked up with a plain `&str`. A `Null` parent gets its
/// own bucket, separate from an empty-string parent.
pub type PropertyTree = IndexMap<Key, IndexMap<Key, Row>>;

/// Fold `rows` into a [`PropertyTree`] in arrival order.
///
/// Parent buckets and the properties inside them keep first-seen order. A
/// later row with the same parent and property replaces the earlier one.
///
/// # Errors
///
/// Returns [`RowError::MalformedRow`] if a row lacks either key column.
pub fn nested_property_tree(
    rows: &[Row],
    parent_key_column: &str,
    property_key_column: &str,
) -> Result<PropertyTree, RowError> {
    let mut tree = PropertyTree::new();
    for row in rows {
        let parent = row.require(parent_key_column)?.to_key();
        let property = row.require(property_key_column)?.to_key();
        let bucket = tree.entry(parent).or_default();
        if let Some(previous) = bucket.insert(property, row.clone()) {
            warn!("duplicate property row replaced: {previous}");
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Value;
    use crate::test_util::stage_row;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stage_rows() -> Vec<Row> {
        vec![
            stage_row("STAGE_LOCATION", "URL", "s3://bucket/path/"),
            stage_row("STAGE_FILE_FORMAT", "TYPE", "CSV"),
            stage_row("STAGE_LOCATION", "AWS_ROLE", ""),
            stage_row("STAGE_FILE_FORMAT", "SKIP_HEADER", "1"),
        ]
    }

    #[rstest]
    fn folds_rows_under_parents(stage_rows: Vec<Row>) {
        let tree = nested_property_tree(&stage_rows, "parent_property", "property")
            .unwrap_or_else(|e| panic!("{e}"));
        let parents: Vec<&str> = tree.keys().filter_map(Key::as_text).collect();
        assert_eq!(parents, vec!["STAGE_LOCATION", "STAGE_FILE_FORMAT"]);

        let format = tree
            .get("STAGE_FILE_FORMAT")
            .unwrap_or_else(|| panic!("file format bucket missing"));
        let properties: Vec<&str> = format.keys().filter_map(Key::as_text).collect();
        assert_eq!(properties, vec!["TYPE", "SKIP_HEADER"]);
        assert_eq!(
            format
                .get("TYPE")
                .and_then(|row| row.get("property_value")),
            Some(&Value::from("CSV"))
        );
    }

    #[rstest]
    fn later_duplicate_wins(mut stage_rows: Vec<Row>) {
        stage_rows.push(stage_row("STAGE_LOCATION", "URL", "s3://other/"));
        let tree = nested_property_tree(&stage_rows, "parent_property", "property")
            .unwrap_or_else(|e| panic!("{e}"));
        let location = tree
            .get("STAGE_LOCATION")
            .unwrap_or_else(|| panic!("location bucket missing"));
        assert_eq!(location.len(), 2);
        assert_eq!(
            location.get("URL").and_then(|row| row.get("property_value")),
            Some(&Value::from("s3://other/"))
        );
        let total: usize = tree.values().map(IndexMap::len).sum();
        assert_eq!(total, 4);
    }

    #[rstest]
    fn null_parent_stays_apart_from_empty_parent() {
        let rows = vec![
            stage_row("", "X", "empty"),
            stage_row("", "X", "unused").with("parent_property", Value::Null),
        ];
        let tree = nested_property_tree(&rows, "parent_property", "property")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(tree.len(), 2);
        let value = |parent: &Key| {
            tree.get(parent)
                .and_then(|bucket| bucket.get("X"))
                .and_then(|row| row.get("property_value"))
                .cloned()
        };
        assert_eq!(value(&Key::from("")), Some(Value::from("empty")));
        assert_eq!(value(&Key::Null), Some(Value::from("unused")));
    }

    #[rstest]
    fn missing_parent_column_is_malformed() {
        let rows = vec![Row::new().with("property", "URL")];
        let Err(err) = nested_property_tree(&rows, "parent_property", "property") else {
            panic!("row without parent accepted");
        };
        assert_eq!(err.column(), "parent_property");
    }

    #[rstest]
    fn empty_listing_has_no_properties() {
        let tree = nested_property_tree(&[], "parent_property", "property")
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(tree.is_empty());
    }
}
