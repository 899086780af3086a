use bullet_chart::core::{
    CategoricalDataset, CellValue, ColumnExtractor, ColumnRole, DatasetColumn, Viewport,
};
use bullet_chart::{BulletChartSettings, ChartError, build_view_model};

const DATASET_JSON: &str = r##"{
    "columns": {
        "Sales.Region": {
            "roles": ["Category"],
            "values": ["North", "South", null]
        },
        "Sales.Amount": {
            "display_name": "Amount",
            "roles": ["Value"],
            "format": "#,0",
            "values": [1200, "n/a", 900],
            "highlights": [600, null, 300]
        },
        "Sales.Goal": {
            "roles": ["TargetValue", "Good"],
            "values": [1000, 1000, 1000]
        },
        "Sales.Stretch": {
            "roles": ["Good"],
            "values": [1, 1, 1]
        }
    }
}"##;

#[test]
fn json_dataset_binds_roles_by_column_order() {
    let dataset = CategoricalDataset::from_json_str(DATASET_JSON).expect("dataset json");
    let columns = dataset.extract();

    let category = columns.category.as_ref().expect("category column");
    assert_eq!(category.source.query_name, "Sales.Region");
    assert_eq!(category.source.display_name, "Sales.Region");
    assert_eq!(category.label(0), Some("North"));
    assert_eq!(category.label(2), None);

    let value = columns.value.as_ref().expect("value column");
    assert_eq!(value.source.display_name, "Amount");
    assert_eq!(value.source.format.as_deref(), Some("#,0"));
    assert_eq!(value.value(0), Some(1200.0));
    assert_eq!(value.value(1), None);
    assert!(value.has_highlights());
    assert!(!value.all_highlights_defined());

    // The first column bound to a role wins.
    let good = columns.good.as_ref().expect("good column");
    assert_eq!(good.source.query_name, "Sales.Goal");
    assert_eq!(
        columns.target_value.as_ref().map(|column| column.source.query_name.as_str()),
        Some("Sales.Goal")
    );
    assert!(columns.maximum.is_none());
    assert!(dataset.measure_column(ColumnRole::Category).is_none());
    assert_eq!(columns.row_count(), 3);
}

#[test]
fn builder_helpers_compose_dataset() {
    let dataset = CategoricalDataset::new()
        .with_column(
            "Region",
            DatasetColumn::new(
                ColumnRole::Category,
                vec!["East".into(), CellValue::Number(7.0), CellValue::Null],
            ),
        )
        .with_column(
            "Revenue",
            DatasetColumn::new(
                ColumnRole::Value,
                vec![CellValue::from(10.0), None::<f64>.into(), CellValue::from(30.0)],
            )
            .with_role(ColumnRole::Maximum)
            .with_display_name("Revenue (k)")
            .with_format("0.0"),
        );

    let columns = dataset.extract();
    let category = columns.category.expect("category column");
    assert_eq!(category.label(1), Some("7"));
    assert_eq!(category.label(2), None);

    let maximum = columns.maximum.expect("maximum column");
    assert_eq!(maximum.source.display_name, "Revenue (k)");
    assert_eq!(maximum.value(2), Some(30.0));
    assert_eq!(maximum.value(1), None);
}

#[test]
fn dataset_drives_full_model_build() {
    let dataset = CategoricalDataset::from_json_str(DATASET_JSON).expect("dataset json");
    let model = build_view_model(
        &dataset,
        Viewport::new(800.0, 600.0),
        &BulletChartSettings::default(),
    )
    .expect("model should be built");

    assert_eq!(model.row_count(), 3);
    assert!(model.has_highlights);
    let first = &model.value_segments[0];
    assert_eq!(first.tooltip[0].display_name, "Amount");
    assert_eq!(first.tooltip[0].value, "1,200");
    assert_eq!(first.tooltip[1].display_name, "Sales.Goal");
    assert!(!model.value_segments[1].highlighted);
    assert_eq!(model.target_markers.len(), 3);
}

#[test]
fn malformed_dataset_json_is_reported() {
    let err = CategoricalDataset::from_json_str(r#"{ "columns": { "A": { "roles": ["Nope"] } } }"#)
        .expect_err("unknown role must be rejected");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
