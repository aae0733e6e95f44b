//! Core value types for histogram representation

use ndhist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement range covered by the grid along one dimension
///
/// Bins are half-open `[low, high)`, except that the topmost edge `max`
/// belongs to the last bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower edge of the first bin (inclusive)
    pub min: f64,
    /// Upper edge of the last bin (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create a validated range; `min < max` and both finite
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the `min < max` invariant
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Bounds [{}, {}] must be finite",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidParameter(format!(
                "Bounds minimum {} must be less than maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Width of the whole range
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value falls within the range (top edge included)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}

/// What happens to a measurement outside the grid bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfBoundsPolicy {
    /// Count it in the nearest edge bin
    #[default]
    Clamp,
    /// Do not count it
    Drop,
}

/// A single bin produced by histogram iteration
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Bin index tuple
    pub index: Vec<usize>,
    /// Position in linear order
    pub linear_index: usize,
    /// Measurement vector at the bin center
    pub center: Vec<f64>,
    /// Number of samples counted in this bin
    pub frequency: u64,
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {:?}: frequency={}",
            self.index, self.center, self.frequency
        )
    }
}
