use bullet_chart::api::ValuesSettings;
use bullet_chart::core::{
    BulletColumns, CategoryColumn, ColumnSource, MeasureColumn, Orientation, Viewport,
};
use bullet_chart::{BulletChartSettings, BulletModelBuilder};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_columns(rows: usize) -> BulletColumns {
    let measure = |name: &str, f: &dyn Fn(f64) -> f64| {
        Some(MeasureColumn::new(
            ColumnSource::new(name, name),
            (0..rows).map(|i| Some(f(i as f64))).collect(),
        ))
    };

    BulletColumns {
        category: Some(CategoryColumn::new(
            ColumnSource::new("Region", "Region"),
            (0..rows).map(|i| Some(format!("Region {i}"))).collect(),
        )),
        value: measure("Value", &|i| 50.0 + (i * 0.37).sin() * 40.0),
        target_value: measure("Target", &|i| 60.0 + (i % 7.0) * 3.0),
        target_value2: measure("Target 2", &|i| 80.0 + (i % 5.0) * 2.0),
        ..BulletColumns::default()
    }
}

fn percentage_settings() -> BulletChartSettings {
    BulletChartSettings::default().with_values(ValuesSettings {
        needs_improvement_percent: Some(25.0),
        satisfactory_percent: Some(60.0),
        good_percent: Some(100.0),
        very_good_percent: Some(150.0),
        maximum_percent: Some(200.0),
        ..ValuesSettings::default()
    })
}

fn bench_model_build_1k_horizontal(c: &mut Criterion) {
    let columns = generated_columns(1_000);
    let settings = percentage_settings();
    let builder = BulletModelBuilder::new();
    let viewport = Viewport::new(1_600.0, 900.0);

    c.bench_function("model_build_1k_horizontal", |b| {
        b.iter(|| {
            let _ = builder
                .build_from_columns(black_box(&columns), black_box(viewport), black_box(&settings))
                .expect("model should be built");
        })
    });
}

fn bench_model_build_1k_vertical_synced(c: &mut Criterion) {
    let columns = generated_columns(1_000);
    let mut settings = percentage_settings().with_orientation(Orientation::VerticalTop);
    settings.axis.sync_axis = true;
    let builder = BulletModelBuilder::new();
    let viewport = Viewport::new(1_600.0, 900.0);

    c.bench_function("model_build_1k_vertical_synced", |b| {
        b.iter(|| {
            let _ = builder
                .build_from_columns(black_box(&columns), black_box(viewport), black_box(&settings))
                .expect("model should be built");
        })
    });
}

fn bench_model_json_contract_1k(c: &mut Criterion) {
    let columns = generated_columns(1_000);
    let model = BulletModelBuilder::new()
        .build_from_columns(&columns, Viewport::new(1_600.0, 900.0), &percentage_settings())
        .expect("model should be built");

    c.bench_function("model_json_contract_1k", |b| {
        b.iter(|| {
            let _ = black_box(&model)
                .to_json_contract_v1_pretty()
                .expect("serialize contract");
        })
    });
}

criterion_group!(
    benches,
    bench_model_build_1k_horizontal,
    bench_model_build_1k_vertical_synced,
    bench_model_json_contract_1k
);
criterion_main!(benches);
