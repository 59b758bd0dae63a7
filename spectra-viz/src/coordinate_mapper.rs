use alloc::vec::Vec;

use embedded_graphics::geometry::Point;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::error::{Result, VizError};

/// Angle of the first polar position: straight up on a y-down canvas.
pub const TOP_START_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    Linear,
    Logarithmic,
}

/// Maps a domain value onto a pixel offset in `[0, extent]`.
///
/// Values outside `[lo, hi]` are extrapolated, not clamped: a wavelength past
/// the end of the axis lands off-canvas, which the draw target clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    lo: f64,
    hi: f64,
    mode: AxisMode,
    extent: u32,
}

impl AxisMapper {
    pub fn new(lo: f64, hi: f64, mode: AxisMode, extent: u32) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(VizError::NonFiniteValue);
        }
        if lo >= hi {
            return Err(VizError::InvalidRange { lo, hi });
        }
        if mode == AxisMode::Logarithmic && lo <= 0.0 {
            return Err(VizError::NonPositiveLogValue(lo));
        }
        Ok(Self {
            lo,
            hi,
            mode,
            extent,
        })
    }

    pub fn linear(lo: f64, hi: f64, extent: u32) -> Result<Self> {
        Self::new(lo, hi, AxisMode::Linear, extent)
    }

    pub fn logarithmic(lo: f64, hi: f64, extent: u32) -> Result<Self> {
        Self::new(lo, hi, AxisMode::Logarithmic, extent)
    }

    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Position of `value` along the axis, 0.0 at `lo` and 1.0 at `hi`.
    pub fn fraction(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(VizError::NonFiniteValue);
        }
        match self.mode {
            AxisMode::Linear => Ok((value - self.lo) / (self.hi - self.lo)),
            AxisMode::Logarithmic => {
                if value <= 0.0 {
                    return Err(VizError::NonPositiveLogValue(value));
                }
                let lo = libm::log10(self.lo);
                let hi = libm::log10(self.hi);
                Ok((libm::log10(value) - lo) / (hi - lo))
            }
        }
    }

    /// Pixel offset of `value`, truncated toward zero.
    pub fn map(&self, value: f64) -> Result<i32> {
        let fraction = self.fraction(value)?;
        Ok((fraction * self.extent as f64) as i32)
    }
}

/// Places `count` positions evenly on a circle, index 1 first.
///
/// With the default start angle index 1 sits at the top and the indices
/// proceed clockwise on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    center_x: f64,
    center_y: f64,
    radius: f64,
    count: usize,
    start_deg: f64,
}

impl PolarLayout {
    pub fn new(center_x: f64, center_y: f64, radius: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(VizError::EmptyLayout);
        }
        if !center_x.is_finite() || !center_y.is_finite() || !radius.is_finite() {
            return Err(VizError::NonFiniteValue);
        }
        Ok(Self {
            center_x,
            center_y,
            radius,
            count,
            start_deg: TOP_START_DEG,
        })
    }

    pub fn with_start_angle(mut self, start_deg: f64) -> Self {
        self.start_deg = start_deg;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    pub fn step_deg(&self) -> f64 {
        360.0 / self.count as f64
    }

    pub fn angle_deg(&self, index: usize) -> Result<f64> {
        if index == 0 || index > self.count {
            return Err(VizError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok((index - 1) as f64 * self.step_deg() + self.start_deg)
    }

    pub fn position(&self, index: usize) -> Result<(f64, f64)> {
        let theta = self.angle_deg(index)?.to_radians();
        Ok((
            self.center_x + self.radius * libm::cos(theta),
            self.center_y + self.radius * libm::sin(theta),
        ))
    }

    /// `position` rounded to the pixel grid.
    pub fn point(&self, index: usize) -> Result<Point> {
        let (x, y) = self.position(index)?;
        Ok(Point::new(libm::round(x) as i32, libm::round(y) as i32))
    }
}

/// Samples an Archimedean spiral growing from `center` out to `radius` over
/// `loops` turns, one point every `step_deg` degrees.
pub fn spiral_points(center: Point, radius: f32, loops: u32, step_deg: u32) -> Vec<Point> {
    let total_deg = 360 * loops;
    let step = step_deg.max(1) as usize;
    (0..total_deg)
        .step_by(step)
        .map(|t| {
            let angle = (t as f32).to_radians();
            let r = t as f32 / total_deg as f32 * radius;
            Point::new(
                center.x + (r * angle.cos()) as i32,
                center.y + (r * angle.sin()) as i32,
            )
        })
        .collect()
}
