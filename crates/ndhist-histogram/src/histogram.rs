//! The N-dimensional frequency histogram
//!
//! A [`Histogram`] owns a rectangular [`BinGrid`], the measurement
//! [`Bounds`] it covers along every dimension, and one frequency counter per
//! bin. Counters are stored in the grid's row-major linear order.

use crate::grid::BinGrid;
use crate::types::{Bin, Bounds, OutOfBoundsPolicy};
use ndhist_core::{Error, Numeric, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Fixed-dimension frequency container
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    grid: BinGrid,
    bounds: Vec<Bounds>,
    bin_widths: Vec<f64>,
    frequencies: Vec<u64>,
    out_of_bounds: OutOfBoundsPolicy,
}

impl Histogram {
    /// Create an empty histogram with `size[d]` bins spanning `bounds[d]`
    pub fn new(size: &[usize], bounds: &[Bounds]) -> Result<Self> {
        let grid = BinGrid::new(size)?;
        Error::check_dimension(grid.dimension(), bounds.len())?;
        for b in bounds {
            b.validate()?;
        }

        let bin_widths = bounds
            .iter()
            .zip(size)
            .map(|(b, &s)| bin_width_of(b, s))
            .collect();
        let frequencies = vec![0; grid.len()];

        Ok(Self {
            grid,
            bounds: bounds.to_vec(),
            bin_widths,
            frequencies,
            out_of_bounds: OutOfBoundsPolicy::default(),
        })
    }

    /// A histogram with no dimensions and no bins
    pub fn unsized_histogram() -> Self {
        Self::default()
    }

    /// Set how measurements outside the bounds are handled
    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    /// How measurements outside the bounds are handled
    pub fn out_of_bounds(&self) -> OutOfBoundsPolicy {
        self.out_of_bounds
    }

    /// Total number of bins (0 if unsized)
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Number of dimensions
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Bins per dimension
    pub fn size(&self) -> &[usize] {
        self.grid.size()
    }

    /// Bin grid shape and strides
    pub fn grid(&self) -> &BinGrid {
        &self.grid
    }

    /// Measurement range per dimension
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// Width of every bin along `dimension`
    pub fn bin_width(&self, dimension: usize) -> Result<f64> {
        self.check_dimension_index(dimension)?;
        Ok(self.bin_widths[dimension])
    }

    /// Lower edge of bin `bin` along `dimension`
    pub fn bin_min(&self, dimension: usize, bin: usize) -> Result<f64> {
        self.check_bin(dimension, bin)?;
        Ok(self.position(dimension, bin as f64))
    }

    /// Upper edge of bin `bin` along `dimension`
    pub fn bin_max(&self, dimension: usize, bin: usize) -> Result<f64> {
        self.check_bin(dimension, bin)?;
        if bin + 1 == self.size()[dimension] {
            // Avoid accumulated rounding on the top edge
            return Ok(self.bounds[dimension].max);
        }
        Ok(self.position(dimension, (bin + 1) as f64))
    }

    /// Center of bin `bin` along `dimension`
    pub fn bin_center(&self, dimension: usize, bin: usize) -> Result<f64> {
        self.check_bin(dimension, bin)?;
        Ok(self.position(dimension, bin as f64 + 0.5))
    }

    /// All bin edges along `dimension`, including the top edge
    pub fn bin_edges(&self, dimension: usize) -> Result<Vec<f64>> {
        self.check_dimension_index(dimension)?;
        let size = self.size()[dimension];
        let mut edges = Vec::with_capacity(size + 1);
        for bin in 0..size {
            edges.push(self.bin_min(dimension, bin)?);
        }
        edges.push(self.bounds[dimension].max);
        Ok(edges)
    }

    /// Measurement vector at the center of the bin
    pub fn measurement_vector(&self, index: &[usize]) -> Result<Vec<f64>> {
        self.grid.check_index(index)?;
        Ok(self.center_unchecked(index))
    }

    /// Frequency of the bin with the given index tuple
    pub fn frequency(&self, index: &[usize]) -> Result<u64> {
        let linear = self.grid.linear_index(index)?;
        Ok(self.frequencies[linear])
    }

    /// Frequency of the bin at a linear index
    pub fn frequency_at(&self, linear: usize) -> Result<u64> {
        self.frequencies
            .get(linear)
            .copied()
            .ok_or_else(|| Error::LinearIndexOutOfRange {
                index: linear,
                len: self.len(),
            })
    }

    /// All frequencies in linear order
    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    /// Sum of all frequencies
    pub fn total_frequency(&self) -> u64 {
        self.frequencies.iter().sum()
    }

    /// Find the bin a measurement vector falls into
    ///
    /// Bins own their lower edge; the top edge of the range belongs to the
    /// last bin. Values beyond the bounds are clamped to the nearest edge bin
    /// or, under [`OutOfBoundsPolicy::Drop`], yield `None`. A NaN component
    /// cannot be placed anywhere and is an error.
    pub fn index<T: Numeric>(&self, measurement: &[T]) -> Result<Option<Vec<usize>>> {
        if self.is_empty() {
            return Err(Error::Configuration(
                "Cannot look up a bin in an unsized histogram".to_string(),
            ));
        }
        Error::check_dimension(self.dimension(), measurement.len())?;

        let mut index = Vec::with_capacity(measurement.len());
        for (dimension, value) in measurement.iter().enumerate() {
            let value = value.to_f64();
            if value.is_nan() {
                return Err(Error::non_finite(&format!(
                    "Component {dimension} of measurement vector"
                )));
            }
            match self.bin_of(dimension, value) {
                Some(bin) => index.push(bin),
                None => return Ok(None),
            }
        }
        Ok(Some(index))
    }

    /// Add one to the bin with the given index tuple
    pub fn increment_frequency(&mut self, index: &[usize]) -> Result<()> {
        let linear = self.grid.linear_index(index)?;
        self.frequencies[linear] += 1;
        Ok(())
    }

    /// Reset every frequency to zero, keeping size and bounds
    pub fn clear(&mut self) {
        self.frequencies.fill(0);
    }

    /// Iterate over every bin in linear order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            histogram: self,
            next: 0,
            index: vec![0; self.dimension()],
        }
    }

    fn bin_of(&self, dimension: usize, value: f64) -> Option<usize> {
        let bounds = self.bounds[dimension];
        let last = self.size()[dimension] - 1;

        if !bounds.contains(value) {
            return match self.out_of_bounds {
                OutOfBoundsPolicy::Clamp if value < bounds.min => Some(0),
                OutOfBoundsPolicy::Clamp => Some(last),
                OutOfBoundsPolicy::Drop => None,
            };
        }
        if value >= bounds.max || last == 0 {
            return Some(last);
        }

        let width = self.bin_widths[dimension];
        let offset = value - bounds.min;
        let offset = if offset.is_finite() {
            offset / width
        } else {
            value / width - bounds.min / width
        };
        let bin = if offset.is_finite() {
            offset.floor() as usize
        } else if offset > 0.0 {
            last
        } else {
            0
        };
        Some(bin.min(last))
    }

    /// Coordinate `offset` bin widths above the lower bound
    fn position(&self, dimension: usize, offset: f64) -> f64 {
        let bounds = self.bounds[dimension];
        let width = self.bin_widths[dimension];
        if width.is_finite() {
            bounds.min + offset * width
        } else {
            // A single bin wider than f64::MAX
            bounds.min * (1.0 - offset) + bounds.max * offset
        }
    }

    fn center_unchecked(&self, index: &[usize]) -> Vec<f64> {
        index
            .iter()
            .enumerate()
            .map(|(d, &i)| self.position(d, i as f64 + 0.5))
            .collect()
    }

    fn check_dimension_index(&self, dimension: usize) -> Result<()> {
        if dimension >= self.dimension() {
            return Err(Error::InvalidParameter(format!(
                "Dimension {dimension} out of range for a {}-dimensional histogram",
                self.dimension()
            )));
        }
        Ok(())
    }

    fn check_bin(&self, dimension: usize, bin: usize) -> Result<()> {
        self.check_dimension_index(dimension)?;
        let size = self.size()[dimension];
        if bin >= size {
            return Err(Error::OutOfRange {
                dimension,
                index: bin,
                size,
            });
        }
        Ok(())
    }
}

// Only a single bin can be wider than f64::MAX; split the range before
// subtracting otherwise.
fn bin_width_of(bounds: &Bounds, size: usize) -> f64 {
    let size = size as f64;
    let width = bounds.width() / size;
    if width.is_finite() {
        width
    } else {
        bounds.max / size - bounds.min / size
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} dims, size={:?}, total={})",
            self.dimension(),
            self.size(),
            self.total_frequency()
        )
    }
}

/// Iterator over the bins of a [`Histogram`] in linear order
///
/// Restart by calling [`Histogram::iter`] again.
pub struct Iter<'a> {
    histogram: &'a Histogram,
    next: usize,
    index: Vec<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Bin;

    fn next(&mut self) -> Option<Bin> {
        if self.next >= self.histogram.len() {
            return None;
        }
        let bin = Bin {
            index: self.index.clone(),
            linear_index: self.next,
            center: self.histogram.center_unchecked(&self.index),
            frequency: self.histogram.frequencies[self.next],
        };
        self.histogram.grid.advance(&mut self.index);
        self.next += 1;
        Some(bin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.histogram.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a Histogram {
    type Item = Bin;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
