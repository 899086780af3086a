use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Direction in which bullets grow and rows are stacked.
///
/// Horizontal orientations stack rows top-to-bottom, vertical orientations
/// stack rows left-to-right. `HorizontalRight` and `VerticalBottom` are the
/// mirrored variants with category labels on the far side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    HorizontalLeft,
    HorizontalRight,
    VerticalTop,
    VerticalBottom,
}

impl Orientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::VerticalTop | Self::VerticalBottom)
    }

    #[must_use]
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::HorizontalRight | Self::VerticalBottom)
    }
}
