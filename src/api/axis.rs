use serde::{Deserialize, Serialize};

use crate::core::BulletScale;
use crate::render::Color;

use super::{AxisSettings, ValueFormatter};

const AXIS_MIN_TICKS: usize = 2;
const AXIS_MAX_TICKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the scaled axis.
    pub position: f64,
    pub label: String,
}

/// Axis description for one bullet, derived from its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisProperties {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub color: Color,
    pub measure_units: String,
    pub units_color: Color,
}

pub(super) fn axis_tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(AXIS_MIN_TICKS, AXIS_MAX_TICKS)
}

pub(super) fn build_axis_properties(
    scale: BulletScale,
    settings: &AxisSettings,
    tick_spacing_px: f64,
    value_format: Option<&str>,
    formatter: &dyn ValueFormatter,
) -> AxisProperties {
    let tick_count = axis_tick_target_count(scale.pixel_length(), tick_spacing_px);
    let ticks = scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: formatter.format_value(value, value_format),
        })
        .filter(|tick| tick.position.is_finite())
        .collect();

    AxisProperties {
        domain: scale.domain(),
        range: scale.range(),
        ticks,
        color: settings.axis_color,
        measure_units: settings.measure_units.clone(),
        units_color: settings.units_color,
    }
}
