use approx::assert_abs_diff_eq;
use bullet_chart::core::{RowMeasures, ThresholdInputs, ThresholdPercents, resolve_thresholds};

fn measures(value: f64, target: Option<f64>) -> RowMeasures {
    RowMeasures {
        value: Some(value),
        target,
        target2: None,
    }
}

#[test]
fn row_without_thresholds_collapses_to_value_domain() {
    let resolution = resolve_thresholds(
        &ThresholdInputs::default(),
        measures(20_000.0, None),
        &ThresholdPercents::default(),
    );

    assert!(!resolution.any_range_defined);
    let thresholds = resolution.thresholds;
    assert_eq!(thresholds.minimum, 0.0);
    assert_eq!(thresholds.needs_improvement, 20_000.0);
    assert_eq!(thresholds.satisfactory, 20_000.0);
    assert_eq!(thresholds.good, 20_000.0);
    assert_eq!(thresholds.very_good, 20_000.0);
    assert_eq!(thresholds.maximum, 20_000.0);
}

#[test]
fn percentages_derive_thresholds_from_target() {
    let percents = ThresholdPercents {
        minimum: Some(0.0),
        needs_improvement: Some(25.0),
        satisfactory: None,
        good: Some(100.0),
        very_good: Some(150.0),
        maximum: Some(200.0),
    };
    let resolution =
        resolve_thresholds(&ThresholdInputs::default(), measures(2.0, Some(3.0)), &percents);

    assert!(resolution.any_range_defined);
    let thresholds = resolution.thresholds;
    assert_abs_diff_eq!(thresholds.minimum, 0.0);
    assert_abs_diff_eq!(thresholds.needs_improvement, 0.75);
    // Satisfactory is unset and back-fills from good.
    assert_abs_diff_eq!(thresholds.satisfactory, 3.0);
    assert_abs_diff_eq!(thresholds.good, 3.0);
    assert_abs_diff_eq!(thresholds.very_good, 4.5);
    assert_abs_diff_eq!(thresholds.maximum, 6.0);
}

#[test]
fn graded_thresholds_are_clamped_up_in_chain_order() {
    let bound = ThresholdInputs {
        needs_improvement: Some(50.0),
        satisfactory: Some(30.0),
        very_good: Some(40.0),
        ..ThresholdInputs::default()
    };
    let resolution = resolve_thresholds(&bound, measures(10.0, None), &ThresholdPercents::default());

    let thresholds = resolution.thresholds;
    assert_eq!(thresholds.needs_improvement, 50.0);
    assert_eq!(thresholds.satisfactory, 50.0);
    assert_eq!(thresholds.good, 50.0);
    assert_eq!(thresholds.very_good, 50.0);
    assert_eq!(thresholds.maximum, 50.0);
    assert!(thresholds.is_ordered());
}

#[test]
fn negative_minimum_is_floored_at_zero_and_chain_follows() {
    let bound = ThresholdInputs {
        minimum: Some(-10.0),
        needs_improvement: Some(-5.0),
        ..ThresholdInputs::default()
    };
    let resolution = resolve_thresholds(&bound, measures(3.0, None), &ThresholdPercents::default());

    assert_eq!(resolution.thresholds.minimum, 0.0);
    assert_eq!(resolution.thresholds.needs_improvement, 0.0);
    assert!(resolution.thresholds.is_ordered());
}

#[test]
fn needs_improvement_below_minimum_is_raised_to_minimum() {
    let bound = ThresholdInputs {
        minimum: Some(10.0),
        needs_improvement: Some(5.0),
        ..ThresholdInputs::default()
    };
    let resolution =
        resolve_thresholds(&bound, measures(20.0, None), &ThresholdPercents::default());

    assert_eq!(resolution.thresholds.needs_improvement, 10.0);
    assert!(resolution.thresholds.is_ordered());
}

#[test]
fn supplied_maximum_is_raised_to_cover_value_and_targets() {
    let bound = ThresholdInputs {
        maximum: Some(5.0),
        ..ThresholdInputs::default()
    };
    let resolution = resolve_thresholds(
        &bound,
        RowMeasures {
            value: Some(8.0),
            target: Some(6.0),
            target2: Some(9.0),
        },
        &ThresholdPercents::default(),
    );

    assert_eq!(resolution.thresholds.maximum, 9.0);
    assert_eq!(resolution.thresholds.very_good, 9.0);
}

#[test]
fn only_very_good_bound_back_fills_lower_thresholds() {
    let bound = ThresholdInputs {
        very_good: Some(50.0),
        ..ThresholdInputs::default()
    };
    let resolution =
        resolve_thresholds(&bound, measures(30.0, None), &ThresholdPercents::default());

    assert!(resolution.any_range_defined);
    let thresholds = resolution.thresholds;
    assert_eq!(thresholds.needs_improvement, 50.0);
    assert_eq!(thresholds.satisfactory, 50.0);
    assert_eq!(thresholds.good, 50.0);
    assert_eq!(thresholds.very_good, 50.0);
    assert_eq!(thresholds.maximum, 50.0);
}

#[test]
fn non_finite_inputs_are_treated_as_absent() {
    let bound = ThresholdInputs {
        good: Some(f64::NAN),
        maximum: Some(f64::INFINITY),
        ..ThresholdInputs::default()
    };
    let resolution = resolve_thresholds(
        &bound,
        RowMeasures {
            value: Some(4.0),
            target: Some(f64::NAN),
            target2: None,
        },
        &ThresholdPercents {
            good: Some(100.0),
            ..ThresholdPercents::default()
        },
    );

    assert!(!resolution.any_range_defined);
    assert_eq!(resolution.thresholds.maximum, 4.0);
    assert!(resolution.thresholds.is_ordered());
}
