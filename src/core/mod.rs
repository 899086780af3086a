pub mod columns;
pub mod dataset;
pub mod range;
pub mod scale;
pub mod types;

pub use columns::{
    BulletColumns, CategoryColumn, ColumnExtractor, ColumnRole, ColumnSource, MeasureColumn,
};
pub use dataset::{CategoricalDataset, CellValue, DatasetColumn};
pub use range::{
    ResolvedThresholds, RowMeasures, ThresholdInputs, ThresholdPercents, ThresholdResolution,
    resolve_thresholds,
};
pub use scale::BulletScale;
pub use types::{Orientation, Viewport};
