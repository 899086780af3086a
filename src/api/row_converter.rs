use smallvec::SmallVec;
use tracing::trace;

use crate::core::{
    BulletColumns, BulletScale, ColumnRole, MeasureColumn, ResolvedThresholds, RowMeasures,
    ThresholdInputs,
};
use crate::render::LinePrimitive;

use super::axis::build_axis_properties;
use super::tooltip::tooltip_item;
use super::{
    BarPlacement, BulletChartSettings, CategoryLabel, LayoutMetrics, PlacementStrategy,
    RangeBand, RangeSegment, SelectionId, TargetMarker, Tooltip, TooltipItem, ValueFormatter,
    ValueSegment, ValuesSettings,
};

/// Series-wide choice between the normal and the highlighted value series.
///
/// Highlighted values are plotted only when every cell of the highlighted
/// series is present; the decision is shared by all rows of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottedSeries {
    pub has_highlights: bool,
    pub use_highlights: bool,
}

impl PlottedSeries {
    #[must_use]
    pub fn select(column: &MeasureColumn) -> Self {
        Self {
            has_highlights: column.has_highlights(),
            use_highlights: column.all_highlights_defined(),
        }
    }

    #[must_use]
    pub fn plotted_value(self, column: &MeasureColumn, index: usize) -> Option<f64> {
        if self.use_highlights {
            column.highlight(index)
        } else {
            column.value(index)
        }
    }

    #[must_use]
    pub fn is_row_highlighted(self, column: &MeasureColumn, index: usize) -> bool {
        self.has_highlights && column.highlight(index).is_some()
    }
}

/// Raw inputs of one category row.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub index: usize,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub highlighted: bool,
    pub target: Option<f64>,
    pub target2: Option<f64>,
    pub bounds: ThresholdInputs,
}

impl CategoryRow {
    /// Reads row `index`; absent targets fall back to the global target settings.
    #[must_use]
    pub fn extract(
        columns: &BulletColumns,
        value_column: &MeasureColumn,
        index: usize,
        plotted: PlottedSeries,
        values: &ValuesSettings,
    ) -> Self {
        let fallback = |role: ColumnRole, setting: Option<f64>| match columns.measure(role) {
            Some(column) => column.value(index),
            None => setting.filter(|value| value.is_finite()),
        };

        Self {
            index,
            category: columns
                .category
                .as_ref()
                .and_then(|column| column.label(index))
                .map(str::to_owned),
            value: plotted.plotted_value(value_column, index),
            highlighted: plotted.is_row_highlighted(value_column, index),
            target: fallback(ColumnRole::TargetValue, values.target_value),
            target2: fallback(ColumnRole::TargetValue2, values.target_value2),
            bounds: ThresholdInputs {
                minimum: columns.measure_value(ColumnRole::Minimum, index),
                needs_improvement: columns.measure_value(ColumnRole::NeedsImprovement, index),
                satisfactory: columns.measure_value(ColumnRole::Satisfactory, index),
                good: columns.measure_value(ColumnRole::Good, index),
                very_good: columns.measure_value(ColumnRole::VeryGood, index),
                maximum: columns.measure_value(ColumnRole::Maximum, index),
            },
        }
    }

    #[must_use]
    pub fn measures(&self) -> RowMeasures {
        RowMeasures {
            value: self.value,
            target: self.target,
            target2: self.target2,
        }
    }
}

/// Inputs shared by every row of one conversion pass.
pub struct RowConversionContext<'a> {
    pub columns: &'a BulletColumns,
    pub settings: &'a BulletChartSettings,
    pub placement: &'a dyn PlacementStrategy,
    pub metrics: LayoutMetrics,
    pub formatter: &'a dyn ValueFormatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedRow {
    pub range_segments: SmallVec<[RangeSegment; 5]>,
    pub value_segment: ValueSegment,
    pub marker: Option<TargetMarker>,
    pub tooltip: Tooltip,
    pub bar: BarPlacement,
}

#[must_use]
pub fn convert_row(
    row: &CategoryRow,
    thresholds: &ResolvedThresholds,
    context: &RowConversionContext<'_>,
    scale: BulletScale,
    has_range_definitions: bool,
) -> ConvertedRow {
    let settings = context.settings;
    let selection_id = SelectionId {
        source: context
            .columns
            .category
            .as_ref()
            .map(|column| column.source.query_name.clone()),
        row_index: row.index,
    };
    let tooltip = build_tooltip(row, context);

    let mut range_segments = SmallVec::new();
    if has_range_definitions {
        let boundaries = thresholds.boundaries();
        for (band, bounds) in RangeBand::ALL.into_iter().zip(boundaries.windows(2)) {
            let start = scale.map(bounds[0]);
            let end = scale.map(bounds[1]);
            if !start.is_finite() || !end.is_finite() || start == end {
                trace!(row = row.index, ?band, start, end, "drop empty range segment");
                continue;
            }
            range_segments.push(RangeSegment {
                row_index: row.index,
                start,
                end,
                band,
                color: band.color(&settings.colors),
                tooltip: tooltip.clone(),
                selection_id: selection_id.clone(),
                highlighted: row.highlighted,
            });
        }
    }

    let value_start = scale.map(thresholds.minimum);
    let value_segment = ValueSegment {
        row_index: row.index,
        start: value_start,
        end: row.value.map_or(value_start, |value| scale.map(value)),
        color: settings.colors.bullet_color,
        tooltip: tooltip.clone(),
        selection_id,
        highlighted: row.highlighted,
    };

    let marker = build_target_marker(row, context, scale);
    let bar = build_bar_placement(row, context, scale);

    ConvertedRow {
        range_segments,
        value_segment,
        marker,
        tooltip,
        bar,
    }
}

fn build_tooltip(row: &CategoryRow, context: &RowConversionContext<'_>) -> Tooltip {
    let columns = context.columns;
    let mut tooltip = Tooltip::new();

    if let (Some(value), Some(column)) = (row.value, columns.value.as_ref()) {
        tooltip.push(tooltip_item(&column.source, value, context.formatter));
    }
    for (role, value) in [
        (ColumnRole::TargetValue, row.target),
        (ColumnRole::TargetValue2, row.target2),
    ] {
        let Some(value) = value else {
            continue;
        };
        let item = match columns.measure(role) {
            Some(column) => tooltip_item(&column.source, value, context.formatter),
            // Target came from settings rather than a bound column.
            None => TooltipItem {
                display_name: role.name().to_owned(),
                value: context.formatter.format_value(
                    value,
                    columns
                        .value
                        .as_ref()
                        .and_then(|column| column.source.format.as_deref()),
                ),
            },
        };
        tooltip.push(item);
    }
    tooltip
}

fn build_target_marker(
    row: &CategoryRow,
    context: &RowConversionContext<'_>,
    scale: BulletScale,
) -> Option<TargetMarker> {
    let primary = row.target.map(|target| scale.map(target)).filter(|p| p.is_finite());
    let secondary = row.target2.map(|target| scale.map(target)).filter(|p| p.is_finite());
    if primary.is_none() && secondary.is_none() {
        return None;
    }

    let metrics = context.metrics;
    let placement = context.placement;
    let color = context.settings.colors.bullet_color;
    let stroke = metrics.target_stroke_width;

    let primary_line = primary.map(|position| {
        let (x1, y1) = placement.local_point(position, -metrics.target_marker_overhang);
        let (x2, y2) = placement.local_point(
            position,
            metrics.bullet_size + metrics.target_marker_overhang,
        );
        LinePrimitive::new(x1, y1, x2, y2, stroke, color)
    });

    let secondary_cross = secondary.map(|position| {
        let half = metrics.second_target_glyph_size / 2.0;
        let center = metrics.bullet_size / 2.0;
        let line = |along_from: f64, across_from: f64, along_to: f64, across_to: f64| {
            let (x1, y1) = placement.local_point(along_from, across_from);
            let (x2, y2) = placement.local_point(along_to, across_to);
            LinePrimitive::new(x1, y1, x2, y2, stroke, color)
        };
        [
            line(
                position - half,
                center - half,
                position + half,
                center + half,
            ),
            line(
                position - half,
                center + half,
                position + half,
                center - half,
            ),
        ]
    });

    Some(TargetMarker {
        row_index: row.index,
        primary,
        secondary,
        color,
        primary_line,
        secondary_cross,
    })
}

fn build_bar_placement(
    row: &CategoryRow,
    context: &RowConversionContext<'_>,
    scale: BulletScale,
) -> BarPlacement {
    let settings = context.settings;
    let (x, y) = context.placement.anchor(row.index);

    let axis = settings.axis.axis.then(|| {
        build_axis_properties(
            scale,
            &settings.axis,
            context.metrics.axis_tick_spacing,
            context
                .columns
                .value
                .as_ref()
                .and_then(|column| column.source.format.as_deref()),
            context.formatter,
        )
    });

    let label = if settings.labels.show {
        row.category.as_ref().map(|text| CategoryLabel {
            text: text.clone(),
            color: settings.labels.label_color,
            font_size_px: settings.labels.font_size_px(),
            max_width: settings.labels.max_width,
        })
    } else {
        None
    };

    BarPlacement {
        row_index: row.index,
        x,
        y,
        scale,
        axis,
        label,
        key: format!("bar-{}", row.index),
    }
}
