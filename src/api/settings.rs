use serde::{Deserialize, Serialize};

use crate::core::{Orientation, ThresholdPercents};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const POINTS_TO_PIXELS: f64 = 96.0 / 72.0;

/// Global target fallbacks and percentage-derived thresholds.
///
/// Percentages are relative to the row target (`100` means "equal to target").
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuesSettings {
    pub target_value: Option<f64>,
    pub target_value2: Option<f64>,
    pub minimum_percent: Option<f64>,
    pub needs_improvement_percent: Option<f64>,
    pub satisfactory_percent: Option<f64>,
    pub good_percent: Option<f64>,
    pub very_good_percent: Option<f64>,
    pub maximum_percent: Option<f64>,
}

impl ValuesSettings {
    #[must_use]
    pub fn percents(&self) -> ThresholdPercents {
        ThresholdPercents {
            minimum: self.minimum_percent,
            needs_improvement: self.needs_improvement_percent,
            satisfactory: self.satisfactory_percent,
            good: self.good_percent,
            very_good: self.very_good_percent,
            maximum: self.maximum_percent,
        }
    }

    fn validate(&self) -> ChartResult<()> {
        for (value, name) in [
            (self.target_value, "targetValue"),
            (self.target_value2, "targetValue2"),
            (self.minimum_percent, "minimumPercent"),
            (self.needs_improvement_percent, "needsImprovementPercent"),
            (self.satisfactory_percent, "satisfactoryPercent"),
            (self.good_percent, "goodPercent"),
            (self.very_good_percent, "veryGoodPercent"),
            (self.maximum_percent, "maximumPercent"),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidSettings(format!(
                    "values.{name} must be finite when set"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelsSettings {
    pub show: bool,
    pub label_color: Color,
    /// Font size in points.
    pub font_size: f64,
    /// Width budget in pixels before the host truncates a category label.
    pub max_width: f64,
}

impl Default for LabelsSettings {
    fn default() -> Self {
        Self {
            show: true,
            label_color: Color::BLACK,
            font_size: 11.0,
            max_width: 80.0,
        }
    }
}

impl LabelsSettings {
    #[must_use]
    pub fn font_size_px(&self) -> f64 {
        self.font_size * POINTS_TO_PIXELS
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrientationSettings {
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsSettings {
    pub min_color: Color,
    pub needs_improvement_color: Color,
    pub satisfactory_color: Color,
    pub good_color: Color,
    pub very_good_color: Color,
    pub bullet_color: Color,
}

impl Default for ColorsSettings {
    fn default() -> Self {
        Self {
            min_color: Color::from_rgb8(0x8B, 0x00, 0x00),
            needs_improvement_color: Color::from_rgb8(0xFF, 0x00, 0x00),
            satisfactory_color: Color::from_rgb8(0xFF, 0xFF, 0x00),
            good_color: Color::from_rgb8(0x00, 0x80, 0x00),
            very_good_color: Color::from_rgb8(0x00, 0x64, 0x00),
            bullet_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisSettings {
    pub axis: bool,
    pub axis_color: Color,
    pub measure_units: String,
    pub units_color: Color,
    /// Share one value domain across every row.
    pub sync_axis: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        let grey = Color::from_rgb8(0x80, 0x80, 0x80);
        Self {
            axis: true,
            axis_color: grey,
            measure_units: String::new(),
            units_color: grey,
            sync_axis: false,
        }
    }
}

/// Formatting-pane settings consumed by the view-model conversion.
///
/// Every group and field falls back to its default when missing, so a host
/// can persist only what the user changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletChartSettings {
    pub values: ValuesSettings,
    pub labels: LabelsSettings,
    pub orientation: OrientationSettings,
    pub colors: ColorsSettings,
    pub axis: AxisSettings,
}

impl BulletChartSettings {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: ValuesSettings) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation.orientation
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.values.validate()?;

        if !self.labels.font_size.is_finite() || self.labels.font_size <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "labels.fontSize must be finite and > 0".to_owned(),
            ));
        }
        if !self.labels.max_width.is_finite() || self.labels.max_width <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "labels.maxWidth must be finite and > 0".to_owned(),
            ));
        }

        for color in [
            self.labels.label_color,
            self.colors.min_color,
            self.colors.needs_improvement_color,
            self.colors.satisfactory_color,
            self.colors.good_color,
            self.colors.very_good_color,
            self.colors.bullet_color,
            self.axis.axis_color,
            self.axis.units_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidSettings(format!("failed to parse settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidSettings(format!("failed to serialize settings json: {e}"))
        })
    }
}
