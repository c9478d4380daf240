use pregrade::{
    constants::{ID_COLUMN, SYNTHETIC_DATA_CSV},
    frame::{DataFrame, FrameError, Series, Value},
};

fn dataset() -> DataFrame {
    DataFrame::from_csv_str(SYNTHETIC_DATA_CSV, ID_COLUMN).expect("load dataset")
}

#[test]
fn loads_the_synthetic_dataset() {
    let data = dataset();

    assert_eq!(data.rows(), 40);
    for column in [
        "titer",
        "infected",
        "symptomatic",
        "days_before_symptoms",
        "isoantigenic",
    ] {
        assert!(data.contains_column(column), "{column}");
    }
    // The identifier column becomes the index, not a regular column.
    assert!(!data.contains_column("id"));
}

#[test]
fn rejects_duplicate_identifiers() {
    let csv = "id,titer\n1,32\n1,64\n";
    let err = DataFrame::from_csv_str(csv, "id").expect_err("duplicate id");
    assert!(matches!(err, FrameError::DuplicateId(_)));
}

#[test]
fn rejects_a_missing_index_column() {
    let csv = "titer\n32\n";
    let err = DataFrame::from_csv_str(csv, "id").expect_err("missing index");
    assert!(matches!(err, FrameError::MissingColumn(_)));
}

#[test]
fn column_lookup_reports_missing_columns() {
    let data = dataset();
    assert!(data.column("titer").is_ok());
    assert!(matches!(data.column("nope"), Err(FrameError::MissingColumn(_))));
}

#[test]
fn with_column_replaces_and_validates_length() {
    let data = dataset();

    let relabeled = data
        .with_column("titer", vec![Value::Int(0); data.rows()])
        .expect("replace column");
    assert_eq!(relabeled.column("titer").expect("titer").count_eq(&Value::Int(0)), 40);

    let err = data
        .with_column("extra", vec![Value::Int(1)])
        .expect_err("length mismatch");
    assert!(matches!(err, FrameError::LengthMismatch { .. }));
}

#[test]
fn with_column_on_an_empty_frame_sets_the_row_count() {
    let frame = DataFrame::new()
        .with_column("test", Vec::new())
        .expect("empty column");
    assert_eq!(frame.rows(), 0);
    assert!(frame.contains_column("test"));
}

#[test]
fn without_column_drops_only_the_named_column() {
    let data = dataset();
    let trimmed = data.without_column("titer").expect("drop titer");

    assert!(!trimmed.contains_column("titer"));
    assert!(trimmed.contains_column("infected"));
    // The original is untouched.
    assert!(data.contains_column("titer"));
}

#[test]
fn append_requires_matching_columns() {
    let data = dataset();

    let doubled = data.append(&data).expect("self append");
    assert_eq!(doubled.rows(), 80);

    let other = DataFrame::from_csv_str("id,other\n1,2\n", "id").expect("frame");
    assert!(matches!(data.append(&other), Err(FrameError::ColumnMismatch)));

    // An empty side is a no-op.
    assert_eq!(data.append(&DataFrame::new()).expect("append empty").rows(), 40);
}

#[test]
fn filter_at_least_keeps_qualifying_rows() {
    let data = dataset();
    let filtered = data.filter_at_least("titer", 32.0).expect("filter");

    assert!(filtered.rows() < data.rows());
    assert!(
        filtered
            .column("titer")
            .expect("titer")
            .values()
            .iter()
            .all(|v| v.as_f64().map(|x| x >= 32.0).unwrap_or(false))
    );
}

#[test]
fn series_statistics() {
    let series = Series::new(
        "days",
        vec![Value::Int(2), Value::Int(4), Value::Null, Value::Int(6)],
    );

    assert_eq!(series.len(), 4);
    assert_eq!(series.sum(), 12.0);
    assert_eq!(series.mean().expect("mean"), 4.0);
    assert_eq!(series.count_eq(&Value::Int(4)), 1);

    let text = Series::new("names", vec![Value::Str("a".into())]);
    assert!(text.mean().is_err());
}
