use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Viewport};

use super::BulletChartSettings;

const LABEL_TOP_RATIO: f64 = 1.4;
const HORIZONTAL_PITCH_WITH_AXIS: f64 = 60.0;
const HORIZONTAL_PITCH_WITHOUT_AXIS: f64 = 28.0;
const HORIZONTAL_LABEL_PADDING: f64 = 20.0;

/// Fixed pixel allowances used to lay bullets out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub scroll_bar_size: f64,
    pub vertical_bar_pitch: f64,
    pub x_margin_horizontal_left: f64,
    pub x_margin_horizontal_right: f64,
    pub y_margin_horizontal: f64,
    pub x_margin_vertical: f64,
    pub y_margin_vertical: f64,
    pub subtitle_margin: f64,
    pub bullet_size: f64,
    pub target_marker_overhang: f64,
    pub second_target_glyph_size: f64,
    pub target_stroke_width: f64,
    pub axis_tick_spacing: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            scroll_bar_size: 22.0,
            vertical_bar_pitch: 100.0,
            x_margin_horizontal_left: 20.0,
            x_margin_horizontal_right: 55.0,
            y_margin_horizontal: 17.5,
            x_margin_vertical: 70.0,
            y_margin_vertical: 10.0,
            subtitle_margin: 10.0,
            bullet_size: 25.0,
            target_marker_overhang: 5.0,
            second_target_glyph_size: 7.0,
            target_stroke_width: 2.0,
            axis_tick_spacing: 50.0,
        }
    }
}

/// Per-update label allowances derived from the label settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelSpace {
    pub height: f64,
    pub height_top: f64,
    pub width: f64,
}

impl LabelSpace {
    #[must_use]
    pub fn from_settings(settings: &BulletChartSettings) -> Self {
        if !settings.labels.show {
            return Self {
                height: 0.0,
                height_top: 0.0,
                width: 0.0,
            };
        }

        let height = settings.labels.font_size_px();
        Self {
            height,
            height_top: height / LABEL_TOP_RATIO,
            width: settings.labels.max_width,
        }
    }
}

/// Orientation-specific placement of bullets, selected once per update.
///
/// "Along" is the scaled value axis, "across" the bullet thickness.
pub trait PlacementStrategy {
    fn orientation(&self) -> Orientation;

    /// Pixel length available to the value scale.
    fn scaled_length(&self, viewport: Viewport) -> f64;

    /// Distance between consecutive rows on the non-scaled axis.
    fn row_pitch(&self) -> f64;

    /// Top-left anchor of the bullet for `row_index`.
    fn anchor(&self, row_index: usize) -> (f64, f64);

    /// Total non-scaled length needed to show `row_count` rows.
    fn content_extent(&self, row_count: usize) -> f64;

    /// Converts along/across offsets to bar-local `(x, y)`.
    fn local_point(&self, along: f64, across: f64) -> (f64, f64);

    fn is_vertical(&self) -> bool {
        self.orientation().is_vertical()
    }
}

/// Rows stacked top-to-bottom, values growing along `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPlacement {
    reversed: bool,
    metrics: LayoutMetrics,
    labels: LabelSpace,
    pitch: f64,
}

impl HorizontalPlacement {
    #[must_use]
    pub fn new(
        reversed: bool,
        metrics: LayoutMetrics,
        labels: LabelSpace,
        axis_enabled: bool,
    ) -> Self {
        let base_pitch = if axis_enabled {
            HORIZONTAL_PITCH_WITH_AXIS
        } else {
            HORIZONTAL_PITCH_WITHOUT_AXIS
        };
        Self {
            reversed,
            metrics,
            labels,
            pitch: base_pitch.max(labels.height + HORIZONTAL_LABEL_PADDING),
        }
    }
}

impl PlacementStrategy for HorizontalPlacement {
    fn orientation(&self) -> Orientation {
        if self.reversed {
            Orientation::HorizontalRight
        } else {
            Orientation::HorizontalLeft
        }
    }

    fn scaled_length(&self, viewport: Viewport) -> f64 {
        let available = viewport.width
            - self.labels.width
            - self.metrics.x_margin_horizontal_left
            - self.metrics.x_margin_horizontal_right
            - self.metrics.scroll_bar_size;
        finite_non_negative(available)
    }

    fn row_pitch(&self) -> f64 {
        self.pitch
    }

    fn anchor(&self, row_index: usize) -> (f64, f64) {
        // Left-labelled bullets start after the label budget; mirrored
        // bullets keep their labels past the far end of the bar.
        let x = if self.reversed {
            self.metrics.x_margin_horizontal_left
        } else {
            self.metrics.x_margin_horizontal_left + self.labels.width
        };
        let y = self.metrics.y_margin_horizontal + self.pitch * row_index as f64;
        (x, y)
    }

    fn content_extent(&self, row_count: usize) -> f64 {
        self.metrics.y_margin_horizontal + self.pitch * row_count as f64
    }

    fn local_point(&self, along: f64, across: f64) -> (f64, f64) {
        (along, across)
    }
}

/// Rows stacked left-to-right, values growing upward along `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlacement {
    reversed: bool,
    metrics: LayoutMetrics,
    labels: LabelSpace,
}

impl VerticalPlacement {
    #[must_use]
    pub fn new(reversed: bool, metrics: LayoutMetrics, labels: LabelSpace) -> Self {
        Self {
            reversed,
            metrics,
            labels,
        }
    }
}

impl PlacementStrategy for VerticalPlacement {
    fn orientation(&self) -> Orientation {
        if self.reversed {
            Orientation::VerticalBottom
        } else {
            Orientation::VerticalTop
        }
    }

    fn scaled_length(&self, viewport: Viewport) -> f64 {
        let available = viewport.height
            - self.labels.height
            - self.metrics.subtitle_margin
            - self.metrics.y_margin_vertical * 2.0
            - self.metrics.scroll_bar_size;
        finite_non_negative(available)
    }

    fn row_pitch(&self) -> f64 {
        self.metrics.vertical_bar_pitch
    }

    fn anchor(&self, row_index: usize) -> (f64, f64) {
        let x = self.metrics.x_margin_vertical + self.metrics.vertical_bar_pitch * row_index as f64;
        let y = if self.reversed {
            self.metrics.y_margin_vertical
        } else {
            self.metrics.y_margin_vertical + self.labels.height
        };
        (x, y)
    }

    fn content_extent(&self, row_count: usize) -> f64 {
        self.metrics.x_margin_vertical + self.metrics.vertical_bar_pitch * row_count as f64
    }

    fn local_point(&self, along: f64, across: f64) -> (f64, f64) {
        (across, along)
    }
}

fn finite_non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Picks the placement strategy for the configured orientation.
#[must_use]
pub fn select_placement(
    settings: &BulletChartSettings,
    metrics: LayoutMetrics,
) -> Box<dyn PlacementStrategy> {
    let orientation = settings.orientation();
    let labels = LabelSpace::from_settings(settings);
    if orientation.is_vertical() {
        Box::new(VerticalPlacement::new(
            orientation.is_reversed(),
            metrics,
            labels,
        ))
    } else {
        Box::new(HorizontalPlacement::new(
            orientation.is_reversed(),
            metrics,
            labels,
            settings.axis.axis,
        ))
    }
}
