//! Core traits for histogram building

use crate::histogram::Histogram;
use ndhist_core::{Result, SampleSource};

/// Trait for building histograms from a sample
pub trait HistogramBuilder<S: SampleSource + ?Sized> {
    /// Build a fresh histogram from the given sample
    ///
    /// Implementations must not return a partially populated histogram: any
    /// error aborts the whole build.
    fn build(&self, sample: &S) -> Result<Histogram>;

    /// Get the target number of bins per dimension (if known)
    fn target_size(&self) -> Option<&[usize]> {
        None
    }
}
