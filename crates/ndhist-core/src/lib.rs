//! Core types shared by the ndhist crates
//!
//! This crate holds the pieces every histogram component depends on:
//!
//! - [`Error`] / [`Result`]: the single error taxonomy (configuration,
//!   out-of-range, dimension mismatch, ...)
//! - [`Numeric`]: the component type of a measurement vector
//! - [`SampleSource`]: read-only, ordered access to measurement vectors,
//!   with [`ListSample`] as the owned implementation
//!
//! # Example
//!
//! ```rust
//! use ndhist_core::{ListSample, SampleSource};
//!
//! let mut sample = ListSample::<f32>::new(2);
//! sample.push_back(&[0.5, 1.5]).unwrap();
//! sample.push_back(&[2.5, 3.5]).unwrap();
//!
//! assert_eq!(sample.len(), 2);
//! assert!(sample.push_back(&[1.0]).is_err());
//! ```

pub mod error;
pub mod numeric;
pub mod sample;

pub use error::{Error, Result};
pub use numeric::Numeric;
pub use sample::{ListSample, MeasurementVectors, SampleSource};
