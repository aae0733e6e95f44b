//! Re-binning a fixed lattice of samples through the filter
//!
//! Every cell center of a 35 x 39 x 49 lattice is sampled once. Shrinking the
//! grid by whole divisors must give uniform counts, which only holds when each
//! rebuild starts from the samples rather than from the previous grid.

mod common;

use common::{center_lattice, lattice_bounds, LATTICE_SIZE};
use ndhist_core::{Error, SampleSource};
use ndhist_histogram::{Histogram, SampleToHistogramFilter};

fn assert_uniform(histogram: &Histogram, size: [usize; 3], expected: u64) {
    assert_eq!(histogram.size(), &size);
    assert_eq!(histogram.len(), size.iter().product::<usize>());
    for bin in histogram {
        assert_eq!(
            bin.frequency, expected,
            "bin {:?} centered at {:?}",
            bin.index, bin.center
        );
    }
}

#[test]
fn test_lattice_rebinning_with_derived_bounds() {
    let sample = center_lattice();
    let mut filter = SampleToHistogramFilter::new();
    filter.set_input(&sample);

    // No size yet
    assert!(matches!(filter.update(), Err(Error::Configuration(_))));
    assert_eq!(filter.output().len(), 0);

    filter.set_histogram_size(LATTICE_SIZE);
    filter.update().unwrap();
    assert_uniform(filter.output(), [35, 39, 49], 1);

    filter.set_histogram_size([7, 39, 49]);
    filter.update().unwrap();
    assert_uniform(filter.output(), [7, 39, 49], 5);

    filter.set_histogram_size([7, 13, 49]);
    filter.update().unwrap();
    assert_uniform(filter.output(), [7, 13, 49], 15);

    filter.set_histogram_size([7, 13, 7]);
    filter.update().unwrap();
    assert_uniform(filter.output(), [7, 13, 7], 105);

    assert_eq!(filter.output().total_frequency(), sample.len() as u64);
    assert_eq!(filter.generation(), 4);
}

#[test]
fn test_lattice_rebinning_with_explicit_bounds() {
    let sample = center_lattice();
    let mut filter = SampleToHistogramFilter::new();
    filter.set_input(&sample);
    filter.set_bounds(lattice_bounds());

    for (size, expected) in [
        ([35, 39, 49], 1),
        ([7, 39, 49], 5),
        ([7, 13, 49], 15),
        ([7, 13, 7], 105),
    ] {
        filter.set_histogram_size(size);
        filter.update().unwrap();
        assert_uniform(filter.output(), size, expected);
    }
}

#[test]
fn test_derived_bounds_are_lattice_extremes() {
    let sample = center_lattice();
    let mut filter = SampleToHistogramFilter::new();
    filter.set_input(&sample);
    filter.set_histogram_size(LATTICE_SIZE);
    filter.update().unwrap();

    let bounds = filter.output().bounds();
    assert_eq!((bounds[0].min, bounds[0].max), (-17.0, 17.0));
    assert_eq!((bounds[1].min, bounds[1].max), (-19.0, 19.0));
    assert_eq!((bounds[2].min, bounds[2].max), (-24.0, 24.0));
}

#[test]
fn test_changing_one_dimension_scales_len() {
    let sample = center_lattice();
    let mut filter = SampleToHistogramFilter::new();
    filter.set_input(&sample);

    filter.set_histogram_size([7, 13, 7]);
    filter.update().unwrap();
    let before = filter.output().len();

    filter.set_histogram_size([7, 13, 49]);
    filter.update().unwrap();
    assert_eq!(filter.output().len(), before * 7);
}
