use tracing::{debug, warn};

use crate::core::{
    BulletColumns, BulletScale, ColumnExtractor, ThresholdResolution, Viewport, resolve_thresholds,
};

use super::layout::{LabelSpace, select_placement};
use super::row_converter::{CategoryRow, PlottedSeries, RowConversionContext, convert_row};
use super::{
    BulletChartSettings, BulletViewModel, DefaultValueFormatter, LayoutMetrics, ValueFormatter,
};

/// Converts extracted columns into a complete [`BulletViewModel`].
///
/// The builder holds only immutable configuration; every `build` call is a
/// pure function of its inputs and produces a fresh model.
pub struct BulletModelBuilder {
    metrics: LayoutMetrics,
    formatter: Box<dyn ValueFormatter>,
}

impl Default for BulletModelBuilder {
    fn default() -> Self {
        Self {
            metrics: LayoutMetrics::default(),
            formatter: Box::new(DefaultValueFormatter),
        }
    }
}

impl BulletModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Builds the model from any column extractor.
    ///
    /// Returns `None` when no Value column is bound or it has no rows.
    #[must_use]
    pub fn build(
        &self,
        extractor: &dyn ColumnExtractor,
        viewport: Viewport,
        settings: &BulletChartSettings,
    ) -> Option<BulletViewModel> {
        let columns = extractor.extract();
        self.build_from_columns(&columns, viewport, settings)
    }

    #[must_use]
    pub fn build_from_columns(
        &self,
        columns: &BulletColumns,
        viewport: Viewport,
        settings: &BulletChartSettings,
    ) -> Option<BulletViewModel> {
        let Some(value_column) = columns.value.as_ref().filter(|column| !column.is_empty()) else {
            debug!("no value column bound or value column is empty; skipping model");
            return None;
        };

        let placement = select_placement(settings, self.metrics);
        let orientation = placement.orientation();
        let labels = LabelSpace::from_settings(settings);
        let scaled_length = placement.scaled_length(viewport);
        if scaled_length == 0.0 {
            warn!(
                width = viewport.width,
                height = viewport.height,
                ?orientation,
                "viewport leaves no room for the value scale"
            );
        }
        let plotted = PlottedSeries::select(value_column);
        let percents = settings.values.percents();
        let row_count = value_column.len();

        let rows: Vec<(CategoryRow, ThresholdResolution)> = (0..row_count)
            .map(|index| {
                let row =
                    CategoryRow::extract(columns, value_column, index, plotted, &settings.values);
                let resolution = resolve_thresholds(&row.bounds, row.measures(), &percents);
                (row, resolution)
            })
            .collect();

        let shared_domain = settings.axis.sync_axis.then(|| sync_axis_domain(&rows));

        let context = RowConversionContext {
            columns,
            settings,
            placement: placement.as_ref(),
            metrics: self.metrics,
            formatter: self.formatter.as_ref(),
        };

        let mut model = BulletViewModel {
            orientation,
            bars: Vec::with_capacity(row_count),
            range_segments: Vec::with_capacity(row_count * 5),
            value_segments: Vec::with_capacity(row_count),
            target_markers: Vec::new(),
            has_highlights: plotted.has_highlights,
            scaled_length,
            row_pitch: placement.row_pitch(),
            content_extent: placement.content_extent(row_count),
            bullet_size: self.metrics.bullet_size,
            label_height: labels.height,
            label_height_top: labels.height_top,
        };

        for (row, resolution) in &rows {
            let thresholds = &resolution.thresholds;
            let (domain_min, domain_max) =
                shared_domain.unwrap_or((thresholds.minimum, thresholds.maximum));
            let scale = BulletScale::new(
                domain_min,
                domain_max,
                scaled_length,
                placement.is_vertical(),
            );

            let converted = convert_row(
                row,
                thresholds,
                &context,
                scale,
                resolution.any_range_defined,
            );
            model.range_segments.extend(converted.range_segments);
            model.value_segments.push(converted.value_segment);
            model.target_markers.extend(converted.marker);
            model.bars.push(converted.bar);
        }

        debug!(
            rows = row_count,
            scaled_length,
            has_highlights = model.has_highlights,
            use_highlights = plotted.use_highlights,
            ?orientation,
            range_segments = model.range_segments.len(),
            "built bullet view model"
        );
        Some(model)
    }
}

fn sync_axis_domain(rows: &[(CategoryRow, ThresholdResolution)]) -> (f64, f64) {
    rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), (_, resolution)| {
        (
            low.min(resolution.thresholds.minimum),
            high.max(resolution.thresholds.maximum),
        )
    })
}

/// Builds a view model with default layout metrics and formatting.
#[must_use]
pub fn build_view_model(
    extractor: &dyn ColumnExtractor,
    viewport: Viewport,
    settings: &BulletChartSettings,
) -> Option<BulletViewModel> {
    BulletModelBuilder::default().build(extractor, viewport, settings)
}
