//! bullet-chart-rs: data-to-geometry engine for bullet chart KPI visuals.
//!
//! The crate turns a categorical dataset and formatting settings into a
//! fully resolved view model (range segments, value bars, target markers,
//! axis ticks and bar placement) that any drawing backend can consume.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BulletChartSettings, BulletModelBuilder, BulletViewModel, build_view_model};
pub use error::{ChartError, ChartResult};
