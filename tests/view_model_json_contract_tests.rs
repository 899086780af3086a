use bullet_chart::api::{BulletViewModelJsonContractV1, RangeBand, VIEW_MODEL_JSON_SCHEMA_V1};
use bullet_chart::core::{BulletColumns, ColumnSource, MeasureColumn, Orientation, Viewport};
use bullet_chart::{BulletChartSettings, BulletViewModel, ChartError, build_view_model};

fn sample_model() -> BulletViewModel {
    let measure = |name: &str, value: f64| {
        Some(MeasureColumn::new(
            ColumnSource::new(name, name),
            vec![Some(value)],
        ))
    };
    let columns = BulletColumns {
        value: measure("Value", 40.0),
        target_value: measure("Target", 50.0),
        target_value2: measure("Target 2", 70.0),
        good: measure("Good", 60.0),
        maximum: measure("Max", 100.0),
        ..BulletColumns::default()
    };
    build_view_model(
        &columns,
        Viewport::new(800.0, 600.0),
        &BulletChartSettings::default().with_orientation(Orientation::HorizontalRight),
    )
    .expect("model should be built")
}

#[test]
fn contract_v1_carries_schema_version() {
    let model = sample_model();
    let json = model.to_json_contract_v1_pretty().expect("serialize contract");

    let payload: BulletViewModelJsonContractV1 =
        serde_json::from_str(&json).expect("parse contract payload");
    assert_eq!(payload.schema_version, VIEW_MODEL_JSON_SCHEMA_V1);
    assert_eq!(payload.model.orientation, Orientation::HorizontalRight);
    assert!(json.contains("\"schema_version\": 1"));
}

#[test]
fn contract_and_bare_model_both_parse() {
    let model = sample_model();

    let from_contract = BulletViewModel::from_json_compat_str(
        &model.to_json_contract_v1_pretty().expect("serialize contract"),
    )
    .expect("parse contract");
    let bare = serde_json::to_string(&model).expect("serialize bare model");
    let from_bare = BulletViewModel::from_json_compat_str(&bare).expect("parse bare model");

    for parsed in [&from_contract, &from_bare] {
        assert_eq!(parsed.row_count(), model.row_count());
        assert_eq!(parsed.range_segments.len(), model.range_segments.len());
        assert_eq!(parsed.band_count(RangeBand::Good), model.band_count(RangeBand::Good));
        assert_eq!(parsed.target_markers.len(), 1);
        assert_eq!(parsed.bars[0].key, "bar-0");
        assert_eq!(
            parsed.value_segments[0].tooltip,
            model.value_segments[0].tooltip
        );
        assert!((parsed.scaled_length - model.scaled_length).abs() <= 1e-9);
    }
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let model = sample_model();
    let json = serde_json::to_string(&BulletViewModelJsonContractV1 {
        schema_version: 2,
        model,
    })
    .expect("serialize payload");

    let err = BulletViewModel::from_json_compat_str(&json).expect_err("v2 must be rejected");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(err.to_string().contains("unsupported"));
}

#[test]
fn garbage_payload_is_rejected() {
    let err = BulletViewModel::from_json_compat_str("{\"bars\": 3}").expect_err("not a model");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
