//! N-dimensional frequency histograms
//!
//! This crate bins multi-component measurement vectors into a rectangular
//! grid of frequency-counted cells, and provides a demand-driven filter that
//! builds and rebuilds that grid from a sample.
//!
//! # Key Features
//!
//! - **Any dimension**: bin counts and bounds are set per dimension
//! - **Row-major addressing**: linear and multi-index access to every bin
//! - **Derived or explicit bounds**: per-dimension min/max taken from the
//!   sample unless supplied
//! - **Lazy rebuilds**: the filter only recomputes after its configuration or
//!   input changed, always from the original sample
//!
//! # Examples
//!
//! ## One-shot histogram
//!
//! ```rust
//! use ndhist_histogram::{GridBuilder, HistogramBuilder};
//!
//! let sample = vec![[0.0, 0.0], [0.2, 0.9], [1.0, 1.0], [0.7, 0.1]];
//! let histogram = GridBuilder::new([2, 2]).build(&sample).unwrap();
//!
//! assert_eq!(histogram.len(), 4);
//! for bin in &histogram {
//!     println!("{:?} centered at {:?}: {}", bin.index, bin.center, bin.frequency);
//! }
//! ```
//!
//! ## Re-binning through the filter
//!
//! ```rust
//! use ndhist_core::ListSample;
//! use ndhist_histogram::{HistogramOps, SampleToHistogramFilter};
//!
//! let sample = ListSample::from_vectors(2, (0..100).map(|i| [i as f64, (i % 10) as f64]))
//!     .unwrap();
//!
//! let mut filter = SampleToHistogramFilter::new();
//! filter.set_input(&sample);
//! filter.set_histogram_size([10, 10]);
//! filter.update().unwrap();
//! assert_eq!(filter.output().total_frequency(), 100);
//!
//! // A new size rebuilds from the sample, not from the old grid
//! filter.set_histogram_size([5, 2]);
//! filter.update().unwrap();
//! assert_eq!(filter.output().marginal_frequencies(1).unwrap(), vec![50, 50]);
//! ```

pub mod builders;
pub mod config;
pub mod filter;
pub mod grid;
pub mod histogram;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{derive_bounds, GridBuilder};
pub use config::HistogramConfig;
pub use filter::SampleToHistogramFilter;
pub use grid::BinGrid;
pub use histogram::{Histogram, Iter};
pub use ops::HistogramOps;
pub use traits::HistogramBuilder;
pub use types::{Bin, Bounds, OutOfBoundsPolicy};

pub use ndhist_core::{Error, Result};

use ndhist_core::SampleSource;

// Convenience functions
/// Create a histogram with `size[d]` equal-width bins over the sample's range
pub fn grid_histogram<S>(sample: &S, size: &[usize]) -> Result<Histogram>
where
    S: SampleSource + ?Sized,
{
    GridBuilder::new(size).build(sample)
}
