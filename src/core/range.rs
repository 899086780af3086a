//! Qualitative range resolution for one category row.
//!
//! A row may bind any subset of the threshold columns. Missing thresholds
//! are derived from percentage settings applied to the row target, then
//! back-filled from the threshold above them so the resolved chain is
//! always complete and non-decreasing.

use serde::{Deserialize, Serialize};

/// Threshold values bound directly by dataset columns for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdInputs {
    pub minimum: Option<f64>,
    pub needs_improvement: Option<f64>,
    pub satisfactory: Option<f64>,
    pub good: Option<f64>,
    pub very_good: Option<f64>,
    pub maximum: Option<f64>,
}

/// Global percentage settings, each relative to the row target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPercents {
    pub minimum: Option<f64>,
    pub needs_improvement: Option<f64>,
    pub satisfactory: Option<f64>,
    pub good: Option<f64>,
    pub very_good: Option<f64>,
    pub maximum: Option<f64>,
}

/// Measured quantities of a row that participate in the domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RowMeasures {
    pub value: Option<f64>,
    pub target: Option<f64>,
    pub target2: Option<f64>,
}

/// Complete ordered thresholds:
/// `minimum <= needs_improvement <= satisfactory <= good <= very_good <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedThresholds {
    pub minimum: f64,
    pub needs_improvement: f64,
    pub satisfactory: f64,
    pub good: f64,
    pub very_good: f64,
    pub maximum: f64,
}

impl ResolvedThresholds {
    /// Thresholds in axis order, minimum first.
    #[must_use]
    pub fn boundaries(&self) -> [f64; 6] {
        [
            self.minimum,
            self.needs_improvement,
            self.satisfactory,
            self.good,
            self.very_good,
            self.maximum,
        ]
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.boundaries().windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResolution {
    pub thresholds: ResolvedThresholds,
    /// At least one graded threshold (needs-improvement..very-good) was bound
    /// or derived from a percentage before back-filling.
    pub any_range_defined: bool,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

fn bound_or_percent(bound: Option<f64>, percent: Option<f64>, target: Option<f64>) -> Option<f64> {
    finite(bound).or_else(|| match (finite(percent), target) {
        (Some(percent), Some(target)) => finite(Some(target * percent / 100.0)),
        _ => None,
    })
}

#[must_use]
pub fn resolve_thresholds(
    bound: &ThresholdInputs,
    measures: RowMeasures,
    percents: &ThresholdPercents,
) -> ThresholdResolution {
    let target = finite(measures.target);

    let minimum = bound_or_percent(bound.minimum, percents.minimum, target)
        .unwrap_or(0.0)
        .max(0.0);

    let mut graded = [
        bound_or_percent(bound.needs_improvement, percents.needs_improvement, target),
        bound_or_percent(bound.satisfactory, percents.satisfactory, target),
        bound_or_percent(bound.good, percents.good, target),
        bound_or_percent(bound.very_good, percents.very_good, target),
    ];
    let any_range_defined = graded.iter().any(Option::is_some);

    let mut floor = minimum;
    for slot in graded.iter_mut() {
        if let Some(value) = slot {
            *value = value.max(floor);
            floor = *value;
        }
    }

    let min_max_value = [
        Some(minimum),
        graded[0],
        graded[1],
        graded[2],
        graded[3],
        finite(measures.value),
        target,
        finite(measures.target2),
    ]
    .into_iter()
    .flatten()
    .fold(minimum, f64::max);

    let maximum = bound_or_percent(bound.maximum, percents.maximum, target)
        .unwrap_or(min_max_value)
        .max(min_max_value);

    let very_good = graded[3].unwrap_or(maximum);
    let good = graded[2].unwrap_or(very_good);
    let satisfactory = graded[1].unwrap_or(good);
    let needs_improvement = graded[0].unwrap_or(satisfactory);

    ThresholdResolution {
        thresholds: ResolvedThresholds {
            minimum,
            needs_improvement,
            satisfactory,
            good,
            very_good,
            maximum,
        },
        any_range_defined,
    }
}

#[cfg(test)]
mod tests {
    use super::{RowMeasures, ThresholdInputs, ThresholdPercents, resolve_thresholds};

    #[test]
    fn percent_is_ignored_without_target() {
        let percents = ThresholdPercents {
            good: Some(50.0),
            ..ThresholdPercents::default()
        };
        let resolution = resolve_thresholds(
            &ThresholdInputs::default(),
            RowMeasures {
                value: Some(10.0),
                ..RowMeasures::default()
            },
            &percents,
        );
        assert!(!resolution.any_range_defined);
        assert_eq!(resolution.thresholds.good, 10.0);
    }

    #[test]
    fn bound_column_wins_over_percent() {
        let bound = ThresholdInputs {
            good: Some(7.0),
            ..ThresholdInputs::default()
        };
        let percents = ThresholdPercents {
            good: Some(50.0),
            ..ThresholdPercents::default()
        };
        let resolution = resolve_thresholds(
            &bound,
            RowMeasures {
                value: Some(1.0),
                target: Some(100.0),
                target2: None,
            },
            &percents,
        );
        assert_eq!(resolution.thresholds.good, 7.0);
    }
}
