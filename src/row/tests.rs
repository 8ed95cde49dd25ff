use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn key_row() -> Row {
    Row::new()
        .with("constraint_name", "PK_ORDERS")
        .with("key_sequence", 2_i64)
        .with("column_name", "LINE_NO")
        .with("comment", Value::Null)
}

#[rstest]
fn columns_keep_result_order(key_row: Row) {
    let columns: Vec<&str> = key_row.columns().collect();
    assert_eq!(
        columns,
        vec!["constraint_name", "key_sequence", "column_name", "comment"]
    );
}

#[rstest]
fn typed_accessors(key_row: Row) {
    assert_eq!(key_row.require_text("column_name"), Ok("LINE_NO"));
    assert_eq!(key_row.require_integer("key_sequence"), Ok(2));
    assert!(key_row.require("comment").is_ok_and(Value::is_null));
}

#[rstest]
#[case("missing", "is missing")]
#[case("key_sequence", "is not text")]
fn text_accessor_reports_malformed_row(
    key_row: Row,
    #[case] column: &str,
    #[case] problem: &str,
) {
    let Err(err) = key_row.require_text(column) else {
        panic!("column `{column}` should be rejected");
    };
    assert_eq!(err.column(), column);
    assert!(err.to_string().contains(problem), "{err}");
    assert!(err.to_string().contains("PK_ORDERS"), "{err}");
}

#[rstest]
#[case(Value::Integer(1), Value::Integer(2), Ordering::Less)]
#[case(Value::Integer(2), Value::Float(1.5), Ordering::Greater)]
#[case(Value::Null, Value::Integer(0), Ordering::Less)]
#[case(Value::from("A"), Value::from("B"), Ordering::Less)]
#[case(Value::Integer(10), Value::from("1"), Ordering::Less)]
fn sort_order(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
    assert_eq!(a.sort_cmp(&b), expected);
    assert_eq!(b.sort_cmp(&a), expected.reverse());
}

#[rstest]
#[case(Value::Null, Key::Null)]
#[case(Value::from("stage_location"), Key::from("stage_location"))]
#[case(Value::Integer(7), Key::Integer(7))]
#[case(Value::Bool(true), Key::Bool(true))]
fn key_conversion(#[case] value: Value, #[case] expected: Key) {
    assert_eq!(value.to_key(), expected);
}

#[rstest]
#[case(Value::Null, Value::from(""))]
#[case(Value::Integer(1), Value::from("1"))]
#[case(Value::Bool(true), Value::from("true"))]
#[case(Value::Float(1.0), Value::Integer(1))]
fn distinct_values_give_distinct_keys(#[case] left: Value, #[case] right: Value) {
    assert_ne!(left.to_key(), right.to_key());
}

#[rstest]
fn text_keys_found_by_str() {
    let map: IndexMap<Key, u8> = [(Value::from("URL").to_key(), 1), (Value::Null.to_key(), 2)]
        .into_iter()
        .collect();
    assert_eq!(map.get("URL"), Some(&1));
    assert_eq!(map.get(""), None);
    assert_eq!(map.get(&Key::Null), Some(&2));
}

#[rstest]
fn collects_from_pairs() {
    let row: Row = [("name", "ID"), ("type", "NUMBER(38,0)")].into_iter().collect();
    assert_eq!(row.len(), 2);
    assert_eq!(row.to_string(), "{name: ID, type: NUMBER(38,0)}");
}

#[rstest]
fn optional_values_map_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}
