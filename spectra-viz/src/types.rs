use embedded_graphics::pixelcolor::Rgb888;

use crate::error::{Result, VizError};

/// A named span on a domain axis (wavelength in meters, frequency in Hz, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub color: Rgb888,
}

impl Band {
    pub const fn new(name: &'static str, min: f64, max: f64, color: Rgb888) -> Self {
        Self {
            name,
            min,
            max,
            color,
        }
    }

    /// Checks the `min < max` invariant of the table entry.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(VizError::NonFiniteValue);
        }
        if self.min >= self.max {
            return Err(VizError::InvalidRange {
                lo: self.min,
                hi: self.max,
            });
        }
        Ok(())
    }
}

/// Strength annotation attached to a band by exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub band: &'static str,
    pub label: &'static str,
    /// Bar height in pixels.
    pub height: i32,
}

impl Strength {
    pub const fn new(band: &'static str, label: &'static str, height: i32) -> Self {
        Self {
            band,
            label,
            height,
        }
    }
}

/// An emitter that references the bands it radiates in by (partial) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSource {
    pub name: &'static str,
    pub regions: &'static [&'static str],
    pub color: Rgb888,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chakra {
    pub name: &'static str,
    pub frequency_hz: u32,
    /// `#rrggbb`, shown verbatim in the panel.
    pub color_code: &'static str,
    pub description: &'static str,
    pub affirmation: &'static str,
}
