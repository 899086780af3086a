use serde::{Deserialize, Serialize};

/// Clamped linear mapping from a value domain to a pixel range.
///
/// Vertical bullets map larger values to smaller `y`, so their pixel range
/// runs from `pixel_length` down to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl BulletScale {
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64, pixel_length: f64, vertical: bool) -> Self {
        let pixel_length = if pixel_length.is_finite() {
            pixel_length.max(0.0)
        } else {
            0.0
        };
        let (range_start, range_end) = if vertical {
            (pixel_length, 0.0)
        } else {
            (0.0, pixel_length)
        };

        Self {
            domain_start: domain_min,
            domain_end: domain_max,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn pixel_length(self) -> f64 {
        (self.range_end - self.range_start).abs()
    }

    /// Maps a domain value to pixels, clamped to the pixel range.
    ///
    /// Non-finite input yields NaN so callers can drop the geometry.
    /// A zero-width domain maps everything to `range_start`.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }

        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            ((value - self.domain_start) / span).clamp(0.0, 1.0)
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Returns "nice" tick values (1, 2 or 5 times a power of ten) inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

fn nice_ticks(mut start: f64, mut stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    if start > stop {
        std::mem::swap(&mut start, &mut stop);
    }

    let step = nice_step((stop - start) / count as f64);
    if step == 0.0 {
        return vec![start, stop];
    }

    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    if last < first {
        return Vec::new();
    }

    // Snap away binary noise such as 0.30000000000000004.
    let decimals = (-step.log10().floor()).max(0.0);
    let snap = 10.0_f64.powf(decimals);
    (first..=last)
        .map(|index| (index as f64 * step * snap).round() / snap)
        .collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    let magnitude = 10.0_f64.powf(step.log10().floor());
    let error = step / magnitude;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}
