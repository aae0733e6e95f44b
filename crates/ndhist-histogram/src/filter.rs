//! Demand-driven construction of a histogram from a sample
//!
//! [`SampleToHistogramFilter`] caches the last histogram it built and only
//! rebuilds when a setter has changed the configuration or the input since.
//! Every rebuild starts from the sample itself; counts from a previous grid
//! are never redistributed.
//!
//! The output is held behind an [`Arc`] and swapped wholesale once a rebuild
//! has fully succeeded. A reader that took [`output_shared`] before a rebuild
//! keeps seeing the histogram it took, and a failed rebuild leaves the
//! previous output in place.
//!
//! [`output_shared`]: SampleToHistogramFilter::output_shared

use crate::builders::GridBuilder;
use crate::config::HistogramConfig;
use crate::histogram::Histogram;
use crate::traits::HistogramBuilder;
use crate::types::{Bounds, OutOfBoundsPolicy};
use ndhist_core::{Error, Result, SampleSource};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Builds and caches a [`Histogram`] from a borrowed [`SampleSource`]
///
/// # Example
///
/// ```rust
/// use ndhist_core::ListSample;
/// use ndhist_histogram::SampleToHistogramFilter;
///
/// let sample = ListSample::from_vectors(1, [[0.5f64], [1.5], [2.5], [3.5]]).unwrap();
///
/// let mut filter = SampleToHistogramFilter::new();
/// filter.set_input(&sample);
/// assert!(filter.update().is_err()); // no size yet
///
/// filter.set_histogram_size([2]);
/// filter.update().unwrap();
/// assert_eq!(filter.output().frequencies(), &[2, 2]);
/// ```
pub struct SampleToHistogramFilter<'a, S: SampleSource + ?Sized> {
    input: Option<&'a S>,
    config: HistogramConfig,
    output: Arc<Histogram>,
    stale: bool,
    generation: u64,
}

impl<'a, S: SampleSource + ?Sized> SampleToHistogramFilter<'a, S> {
    /// Create a filter with no input, no size and an unsized output
    pub fn new() -> Self {
        Self::with_config(HistogramConfig::default())
    }

    /// Create a filter from a configuration
    pub fn with_config(config: HistogramConfig) -> Self {
        Self {
            input: None,
            config,
            output: Arc::new(Histogram::unsized_histogram()),
            stale: true,
            generation: 0,
        }
    }

    /// Set the sample to bin
    pub fn set_input(&mut self, sample: &'a S) {
        self.input = Some(sample);
        self.stale = true;
    }

    /// The sample to bin, if set
    pub fn input(&self) -> Option<&'a S> {
        self.input
    }

    /// Set the number of bins per dimension
    pub fn set_histogram_size(&mut self, size: impl Into<Vec<usize>>) {
        self.config.size = Some(size.into());
        self.stale = true;
    }

    /// The requested number of bins per dimension, if set
    pub fn histogram_size(&self) -> Option<&[usize]> {
        self.config.size.as_deref()
    }

    /// Use explicit bounds instead of deriving them from the sample
    pub fn set_bounds(&mut self, bounds: impl Into<Vec<Bounds>>) {
        self.config.bounds = Some(bounds.into());
        self.stale = true;
    }

    /// Go back to deriving bounds from the sample
    pub fn clear_bounds(&mut self) {
        self.config.bounds = None;
        self.stale = true;
    }

    /// Explicit bounds, if set
    pub fn bounds(&self) -> Option<&[Bounds]> {
        self.config.bounds.as_deref()
    }

    /// Set how measurements outside the bounds are handled
    pub fn set_out_of_bounds_policy(&mut self, policy: OutOfBoundsPolicy) {
        self.config.out_of_bounds = policy;
        self.stale = true;
    }

    /// Replace the whole configuration
    pub fn set_config(&mut self, config: HistogramConfig) {
        self.config = config;
        self.stale = true;
    }

    /// Current configuration
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Whether the output no longer reflects the configuration and input
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Number of successful rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last successfully built histogram
    ///
    /// This never triggers a rebuild. Before the first successful
    /// [`update`](Self::update) it is the unsized histogram.
    pub fn output(&self) -> &Histogram {
        &self.output
    }

    /// A handle to the last successfully built histogram that outlives rebuilds
    pub fn output_shared(&self) -> Arc<Histogram> {
        Arc::clone(&self.output)
    }

    /// Rebuild the output if the configuration or input changed
    ///
    /// Fails with [`Error::Configuration`] if no histogram size was ever set,
    /// even when nothing else is pending. On any error the previous output
    /// is kept and the filter stays stale.
    #[instrument(skip_all, fields(generation = self.generation))]
    pub fn update(&mut self) -> Result<()> {
        if self.config.size.is_none() {
            return Err(Error::Configuration(
                "Histogram size has not been set".to_string(),
            ));
        }
        if !self.stale {
            trace!("Histogram is up to date; skipping rebuild");
            return Ok(());
        }
        let sample = self
            .input
            .ok_or_else(|| Error::Configuration("No input sample has been set".to_string()))?;

        let builder = GridBuilder::from_config(&self.config)?;
        let histogram = builder.build(sample)?;

        debug!(
            "Rebuilt histogram {} from {} samples",
            histogram,
            sample.len()
        );
        self.output = Arc::new(histogram);
        self.stale = false;
        self.generation += 1;
        Ok(())
    }
}

impl<'a, S: SampleSource + ?Sized> Default for SampleToHistogramFilter<'a, S> {
    fn default() -> Self {
        Self::new()
    }
}
