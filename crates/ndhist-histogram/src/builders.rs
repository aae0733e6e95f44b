//! Histogram building strategies

use crate::config::HistogramConfig;
use crate::histogram::Histogram;
use crate::traits::HistogramBuilder;
use crate::types::{Bounds, OutOfBoundsPolicy};
use ndhist_core::{Error, Numeric, Result, SampleSource};
use tracing::{debug, instrument};

/// Fixed-grid histogram builder
///
/// Creates a histogram with `size[d]` equal-width bins along every dimension.
/// Bounds are either supplied up front or derived from the sample's
/// per-dimension minimum and maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBuilder {
    size: Vec<usize>,
    bounds: Option<Vec<Bounds>>,
    out_of_bounds: OutOfBoundsPolicy,
}

impl GridBuilder {
    /// Create a new grid builder with the given bins per dimension
    pub fn new(size: impl Into<Vec<usize>>) -> Self {
        Self {
            size: size.into(),
            bounds: None,
            out_of_bounds: OutOfBoundsPolicy::default(),
        }
    }

    /// Create a builder from a configuration; the size must be set
    pub fn from_config(config: &HistogramConfig) -> Result<Self> {
        let size = config.size.clone().ok_or_else(|| {
            Error::Configuration("Histogram size has not been set".to_string())
        })?;
        Ok(Self {
            size,
            bounds: config.bounds.clone(),
            out_of_bounds: config.out_of_bounds,
        })
    }

    /// Use explicit bounds instead of deriving them from the sample
    pub fn with_bounds(mut self, bounds: impl Into<Vec<Bounds>>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    /// Set how measurements outside the bounds are handled
    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    /// Bins per dimension
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Explicit bounds, if any
    pub fn bounds(&self) -> Option<&[Bounds]> {
        self.bounds.as_deref()
    }

    fn check_sample<S: SampleSource + ?Sized>(&self, sample: &S) -> Result<()> {
        if let Some(d) = self.size.iter().position(|&s| s == 0) {
            return Err(Error::Configuration(format!(
                "Histogram size has zero bins in dimension {d}"
            )));
        }
        let declared = sample.measurement_vector_size();
        // An empty nested-vector sample cannot declare a size
        if declared == 0 && sample.is_empty() {
            return Ok(());
        }
        Error::check_dimension(self.size.len(), declared)
    }

    fn resolve_bounds<S: SampleSource + ?Sized>(&self, sample: &S) -> Result<Vec<Bounds>> {
        match &self.bounds {
            Some(bounds) => {
                Error::check_dimension(self.size.len(), bounds.len())?;
                Ok(bounds.clone())
            }
            None => derive_bounds(sample, self.size.len()),
        }
    }
}

impl<S: SampleSource + ?Sized> HistogramBuilder<S> for GridBuilder {
    #[instrument(skip_all, fields(size = ?self.size))]
    fn build(&self, sample: &S) -> Result<Histogram> {
        self.check_sample(sample)?;
        let bounds = self.resolve_bounds(sample)?;
        debug!("Binning {} samples into bounds {:?}", sample.len(), bounds);

        let mut histogram =
            Histogram::new(&self.size, &bounds)?.with_out_of_bounds(self.out_of_bounds);

        // Single pass; any bad vector aborts before the histogram escapes
        let mut dropped = 0usize;
        for measurement in sample.measurement_vectors() {
            match histogram.index(measurement)? {
                Some(index) => histogram.increment_frequency(&index)?,
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!("Dropped {} samples outside the histogram bounds", dropped);
        }
        Ok(histogram)
    }

    fn target_size(&self) -> Option<&[usize]> {
        Some(&self.size)
    }
}

/// Derive per-dimension bounds from the smallest and largest component
///
/// A dimension whose components are all equal is widened to
/// `[value, value + 1]` so the range is never empty. Where `1` is below the
/// float spacing at `value`, the range grows by a few units in the last place
/// instead.
pub fn derive_bounds<S: SampleSource + ?Sized>(
    sample: &S,
    dimension: usize,
) -> Result<Vec<Bounds>> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }

    let mut min = vec![f64::INFINITY; dimension];
    let mut max = vec![f64::NEG_INFINITY; dimension];
    for (id, measurement) in sample.measurement_vectors().enumerate() {
        Error::check_dimension(dimension, measurement.len())?;
        for (d, component) in measurement.iter().enumerate() {
            let value = component.to_f64();
            if value.is_nan() {
                return Err(Error::non_finite(&format!("Measurement vector {id}")));
            }
            min[d] = min[d].min(value);
            max[d] = max[d].max(value);
        }
    }

    min.into_iter()
        .zip(max)
        .enumerate()
        .map(|(d, (lo, hi))| {
            if lo == hi {
                debug!("Dimension {} has a single value {}; widening its range", d, lo);
                widen(lo)
            } else {
                Bounds::new(lo, hi)
            }
        })
        .collect()
}

fn widen(value: f64) -> Result<Bounds> {
    let step = (value.abs() * 2.0 * f64::EPSILON).max(1.0);
    if (value + step).is_finite() {
        Bounds::new(value, value + step)
    } else {
        Bounds::new(value - step, value)
    }
}
