mod null_renderer;
mod primitives;

pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive};

use crate::api::BulletViewModel;
use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully resolved view model so drawing code stays
/// isolated from data conversion and layout rules.
pub trait Renderer {
    fn render(&mut self, model: &BulletViewModel) -> ChartResult<()>;
}
