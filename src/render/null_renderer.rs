use crate::api::BulletViewModel;
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the model so tests catch invalid geometry without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_range_segment_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, model: &BulletViewModel) -> ChartResult<()> {
        model.validate()?;
        self.last_bar_count = model.bars.len();
        self.last_range_segment_count = model.range_segments.len();
        self.last_marker_count = model.target_markers.len();
        Ok(())
    }
}
