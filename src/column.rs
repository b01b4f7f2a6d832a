//! Column width estimation.
//!
//! Turns a table cell's physical width and a font size into the number of
//! characters that comfortably fit on one line of that cell.

use crate::error::{Error, Result};

/// Scaling applied when the caller has no better calibration.
pub const DEFAULT_SCALING: f64 = 0.95;

// Characters per inch of cell width at a 1pt font, for a monospaced approximation.
const CHARS_PER_INCH_AT_1PT: f64 = 120.0;

/// How many of the caller's length units make up one inch and one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Units {
    per_inch: f64,
    per_point: f64,
}

impl Units {
    /// English Metric Units, as stored in Word documents.
    pub const EMU: Units = Units {
        per_inch: 914_400.0,
        per_point: 12_700.0,
    };

    /// Lengths already expressed in points.
    pub const POINTS: Units = Units {
        per_inch: 72.0,
        per_point: 1.0,
    };

    pub fn new(per_inch: f64, per_point: f64) -> Result<Self> {
        if !(per_inch.is_finite() && per_inch > 0.0) {
            return Err(Error::InvalidScale("units per inch must be positive"));
        }
        if !(per_point.is_finite() && per_point > 0.0) {
            return Err(Error::InvalidScale("units per point must be positive"));
        }
        Ok(Self {
            per_inch,
            per_point,
        })
    }

    pub fn inches(&self, len: f64) -> f64 {
        len / self.per_inch
    }

    pub fn points(&self, len: f64) -> f64 {
        len / self.per_point
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::EMU
    }
}

/// Estimated max characters per line: `inches(cell) * (120 / points(font)) * scaling`.
///
/// Inputs are not validated beyond the zero font size, which would otherwise
/// divide by zero.
pub fn max_chars_per_line(cell_width: f64, font_size: f64, scaling: f64, units: Units) -> Result<f64> {
    let font_points = units.points(font_size);
    if font_points == 0.0 {
        return Err(Error::DivideByZero);
    }
    Ok(units.inches(cell_width) * (CHARS_PER_INCH_AT_1PT / font_points) * scaling)
}

/// [`max_chars_per_line`] truncated to a usable reflow width (never below 1).
pub fn max_width_for_cell(cell_width: f64, font_size: f64, scaling: f64, units: Units) -> Result<usize> {
    let chars = max_chars_per_line(cell_width, font_size, scaling, units)?;
    Ok((chars.floor() as usize).max(1))
}
