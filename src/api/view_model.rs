use serde::{Deserialize, Serialize};

use crate::core::{BulletScale, Orientation};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive};

use super::{AxisProperties, ColorsSettings, Tooltip};

/// Qualitative zone of the range bar, in axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeBand {
    Minimum,
    NeedsImprovement,
    Satisfactory,
    Good,
    VeryGood,
}

impl RangeBand {
    pub const ALL: [Self; 5] = [
        Self::Minimum,
        Self::NeedsImprovement,
        Self::Satisfactory,
        Self::Good,
        Self::VeryGood,
    ];

    #[must_use]
    pub fn color(self, colors: &ColorsSettings) -> Color {
        match self {
            Self::Minimum => colors.min_color,
            Self::NeedsImprovement => colors.needs_improvement_color,
            Self::Satisfactory => colors.satisfactory_color,
            Self::Good => colors.good_color,
            Self::VeryGood => colors.very_good_color,
        }
    }
}

/// Identity handed to the selection layer for one category row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionId {
    /// Query name of the category column, when one is bound.
    pub source: Option<String>,
    pub row_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSegment {
    pub row_index: usize,
    pub start: f64,
    pub end: f64,
    pub band: RangeBand,
    pub color: Color,
    pub tooltip: Tooltip,
    pub selection_id: SelectionId,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSegment {
    pub row_index: usize,
    pub start: f64,
    pub end: f64,
    pub color: Color,
    pub tooltip: Tooltip,
    pub selection_id: SelectionId,
    pub highlighted: bool,
}

/// Target glyphs of one row.
///
/// Positions are scaled pixels along the value axis; glyph lines are in
/// bar-local coordinates (relative to the row's `BarPlacement` anchor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetMarker {
    pub row_index: usize,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
    pub color: Color,
    pub primary_line: Option<LinePrimitive>,
    pub secondary_cross: Option<[LinePrimitive; 2]>,
}

/// Untruncated category text plus the budget the text measurer may use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub text: String,
    pub color: Color,
    pub font_size_px: f64,
    pub max_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPlacement {
    pub row_index: usize,
    pub x: f64,
    pub y: f64,
    pub scale: BulletScale,
    pub axis: Option<AxisProperties>,
    pub label: Option<CategoryLabel>,
    pub key: String,
}

/// Fully resolved geometry for one draw pass.
///
/// `row_index` joins bars, segments and markers; every collection keeps
/// dataset row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletViewModel {
    pub orientation: Orientation,
    pub bars: Vec<BarPlacement>,
    pub range_segments: Vec<RangeSegment>,
    pub value_segments: Vec<ValueSegment>,
    pub target_markers: Vec<TargetMarker>,
    pub has_highlights: bool,
    pub scaled_length: f64,
    pub row_pitch: f64,
    pub content_extent: f64,
    pub bullet_size: f64,
    pub label_height: f64,
    pub label_height_top: f64,
}

impl BulletViewModel {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.bars.len()
    }

    pub fn range_segments_for_row(&self, row_index: usize) -> impl Iterator<Item = &RangeSegment> {
        self.range_segments
            .iter()
            .filter(move |segment| segment.row_index == row_index)
    }

    #[must_use]
    pub fn band_count(&self, band: RangeBand) -> usize {
        self.range_segments
            .iter()
            .filter(|segment| segment.band == band)
            .count()
    }

    /// Checks the invariants a renderer relies on.
    pub fn validate(&self) -> ChartResult<()> {
        for bar in &self.bars {
            if !bar.x.is_finite() || !bar.y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bar {} anchor must be finite",
                    bar.row_index
                )));
            }
        }
        for segment in &self.range_segments {
            if !segment.start.is_finite() || !segment.end.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "range segment of row {} must be finite",
                    segment.row_index
                )));
            }
            segment.color.validate()?;
        }
        for segment in &self.value_segments {
            if !segment.start.is_finite() || !segment.end.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "value segment of row {} must be finite",
                    segment.row_index
                )));
            }
            segment.color.validate()?;
        }
        for marker in &self.target_markers {
            if let Some(line) = marker.primary_line {
                line.validate()?;
            }
            for line in marker.secondary_cross.iter().flatten() {
                line.validate()?;
            }
        }
        Ok(())
    }
}
