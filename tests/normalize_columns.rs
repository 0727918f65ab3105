use data_glimpse::columns::{
    canonical_label, clean_column_names, normalize_labels, CollisionPolicy, NormalizeOptions,
    COLUMN_MAP,
};
use data_glimpse::types::{DataSet, DataType, Field, Schema, Value};
use data_glimpse::{Table, TableError};
use polars::prelude::*;

fn inspection_dataset() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("OBJECTID", DataType::Int64),
        Field::new("* Damage", DataType::Utf8),
        Field::new("Hello World!", DataType::Utf8),
        Field::new("__Foo__", DataType::Float64),
    ]);
    let rows = vec![
        vec![
            Value::Int64(1),
            Value::Utf8("No Damage".to_string()),
            Value::Utf8("a".to_string()),
            Value::Float64(1.5),
        ],
        vec![Value::Int64(2), Value::Null, Value::Null, Value::Null],
    ];
    DataSet::new(schema, rows)
}

#[test]
fn every_known_header_maps_to_its_target() {
    for (header, target) in COLUMN_MAP {
        assert_eq!(canonical_label(header), *target, "header {header:?}");
    }
}

#[test]
fn clean_column_names_renames_and_preserves_shape() {
    let mut ds = inspection_dataset();
    let rows_before = ds.rows.clone();
    clean_column_names(&mut ds, &NormalizeOptions::default()).unwrap();

    assert_eq!(ds.column_labels(), vec!["object_id", "damage", "hello_world", "foo"]);
    assert_eq!(ds.column_count(), 4);
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows, rows_before);
    // Types travel with their columns.
    assert_eq!(ds.schema.fields[3].data_type, DataType::Float64);
}

#[test]
fn cleaning_is_idempotent_on_canonical_labels() {
    let mut once = inspection_dataset();
    clean_column_names(&mut once, &NormalizeOptions::default()).unwrap();
    let mut twice = once.clone();
    clean_column_names(&mut twice, &NormalizeOptions::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn map_targets_are_fixed_points() {
    let targets: Vec<&str> = COLUMN_MAP.iter().map(|(_, t)| *t).collect();
    assert_eq!(normalize_labels(&targets), targets);
    // The short coordinate headers are known headers, not canonical labels.
    assert_eq!(normalize_labels(&["x", "y"]), vec!["x_coord", "y_coord"]);
}

#[test]
fn frame_columns_are_renamed_in_place_order() {
    let mut df = df!(
        "OBJECTID" => [1i64, 2],
        "* Street Name" => ["Main", "Oak"],
        "Parcel Notes (misc)" => [Some("n/a"), None],
    )
    .unwrap();

    clean_column_names(&mut df, &NormalizeOptions::default()).unwrap();
    assert_eq!(df.column_labels(), vec!["object_id", "street_name", "parcel_notes__misc"]);
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
}

#[test]
fn frame_collision_is_reported_by_the_container() {
    let mut df = df!("* Damage" => [1i64], "Damage" => [2i64]).unwrap();
    let err = clean_column_names(&mut df, &NormalizeOptions::default()).unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn { ref label } if label == "damage"));
    assert_eq!(df.column_labels(), vec!["* Damage", "Damage"]);
}

#[test]
fn reject_policy_names_the_colliding_sources() {
    let mut df = df!("* Damage" => [1i64], "Damage" => [2i64]).unwrap();
    let opts = NormalizeOptions {
        on_collision: CollisionPolicy::Reject,
    };
    let err = clean_column_names(&mut df, &opts).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("label collision"));
    assert!(msg.contains("* Damage"));
    assert!(msg.contains("'damage'"));
    // The caller still owns the untouched frame.
    assert_eq!(df.column_labels(), vec!["* Damage", "Damage"]);
    assert_eq!(df.height(), 1);
}
