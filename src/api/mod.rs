//! View-model conversion: settings, layout, per-row conversion and the
//! top-level model builder.

mod axis;
mod json_contract;
mod layout;
mod model_builder;
mod row_converter;
mod settings;
mod tooltip;
mod view_model;

pub use axis::{AxisProperties, AxisTick};
pub use json_contract::{BulletViewModelJsonContractV1, VIEW_MODEL_JSON_SCHEMA_V1};
pub use layout::{
    HorizontalPlacement, LabelSpace, LayoutMetrics, PlacementStrategy, VerticalPlacement,
    select_placement,
};
pub use model_builder::{BulletModelBuilder, build_view_model};
pub use row_converter::{
    CategoryRow, ConvertedRow, PlottedSeries, RowConversionContext, convert_row,
};
pub use settings::{
    AxisSettings, BulletChartSettings, ColorsSettings, LabelsSettings, OrientationSettings,
    ValuesSettings,
};
pub use tooltip::{DefaultValueFormatter, Tooltip, TooltipItem, ValueFormatter};
pub use view_model::{
    BarPlacement, BulletViewModel, CategoryLabel, RangeBand, RangeSegment, SelectionId,
    TargetMarker, ValueSegment,
};
