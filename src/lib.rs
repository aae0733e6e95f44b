//! # ndhist
//!
//! N-dimensional frequency histograms built from samples of measurement
//! vectors.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`ndhist_core`]: errors, the [`Numeric`](ndhist_core::Numeric) trait and
//!   the [`SampleSource`](ndhist_core::SampleSource) abstraction
//! - [`ndhist_histogram`]: the histogram itself, grid builders and the
//!   [`SampleToHistogramFilter`](ndhist_histogram::SampleToHistogramFilter)
//!
//! ```rust
//! use ndhist::prelude::*;
//!
//! let sample = ListSample::from_vectors(2, [[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]).unwrap();
//!
//! let mut filter = SampleToHistogramFilter::new();
//! filter.set_input(&sample);
//! filter.set_histogram_size([3, 3]);
//! filter.update().unwrap();
//!
//! let histogram = filter.output();
//! assert_eq!(histogram.frequency(&[1, 1]).unwrap(), 1);
//! assert_eq!(histogram.marginal_frequencies(0).unwrap(), vec![1, 1, 1]);
//! ```

pub use ndhist_core;
pub use ndhist_histogram;

pub use ndhist_histogram::grid_histogram;

pub mod prelude {
    pub use ndhist_core::{Error, ListSample, Numeric, Result, SampleSource};
    pub use ndhist_histogram::{
        Bin, Bounds, GridBuilder, Histogram, HistogramBuilder, HistogramConfig, HistogramOps,
        OutOfBoundsPolicy, SampleToHistogramFilter,
    };
}
