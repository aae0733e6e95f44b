//! Operations on histograms

use crate::histogram::Histogram;
use ndhist_core::{Error, Result};

/// Per-dimension summaries of a histogram
pub trait HistogramOps {
    /// Total frequency of every bin whose index along `dimension` is `bin`
    fn marginal_frequency(&self, dimension: usize, bin: usize) -> Result<u64>;

    /// Marginal frequencies of every bin along `dimension`
    fn marginal_frequencies(&self, dimension: usize) -> Result<Vec<u64>>;

    /// Value below which a proportion `p` of the samples lie along `dimension`
    ///
    /// Walks the cumulative marginal distribution and interpolates linearly
    /// inside the bin where the cumulative proportion first reaches `p`.
    fn quantile(&self, dimension: usize, p: f64) -> Result<f64>;

    /// Frequency-weighted mean of bin centers along `dimension`
    fn mean(&self, dimension: usize) -> Result<f64>;
}

impl HistogramOps for Histogram {
    fn marginal_frequency(&self, dimension: usize, bin: usize) -> Result<u64> {
        // Validates both the dimension and the bin
        self.bin_min(dimension, bin)?;
        Ok(self.marginal_frequencies(dimension)?[bin])
    }

    fn marginal_frequencies(&self, dimension: usize) -> Result<Vec<u64>> {
        self.bin_width(dimension)?;
        let size = self.size()[dimension];
        let stride = self.grid().strides()[dimension];

        let mut marginals = vec![0; size];
        for (linear, &frequency) in self.frequencies().iter().enumerate() {
            marginals[(linear / stride) % size] += frequency;
        }
        Ok(marginals)
    }

    fn quantile(&self, dimension: usize, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        let marginals = self.marginal_frequencies(dimension)?;
        let bounds = self.bounds()[dimension];
        let total: u64 = marginals.iter().sum();
        if total == 0 {
            return Ok(bounds.min);
        }

        let target = p * total as f64;
        let mut cumulative = 0.0;
        for (bin, &frequency) in marginals.iter().enumerate() {
            if frequency == 0 {
                continue;
            }
            let next = cumulative + frequency as f64;
            if next >= target {
                let lo = self.bin_min(dimension, bin)?;
                let hi = self.bin_max(dimension, bin)?;
                let fraction = (target - cumulative) / frequency as f64;
                let span = hi - lo;
                return Ok(if span.is_finite() {
                    lo + fraction * span
                } else {
                    lo * (1.0 - fraction) + hi * fraction
                });
            }
            cumulative = next;
        }
        Ok(bounds.max)
    }

    fn mean(&self, dimension: usize) -> Result<f64> {
        let marginals = self.marginal_frequencies(dimension)?;
        let total: u64 = marginals.iter().sum();
        if total == 0 {
            let bounds = self.bounds()[dimension];
            return Ok((bounds.min + bounds.max) / 2.0);
        }

        let total = total as f64;
        let mut mean = 0.0;
        for (bin, &frequency) in marginals.iter().enumerate() {
            mean += frequency as f64 / total * self.bin_center(dimension, bin)?;
        }
        Ok(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;
    use approx::assert_relative_eq;

    fn sample_histogram() -> Histogram {
        // 2 x 3 grid over [0, 2) x [0, 3)
        let mut hist = Histogram::new(
            &[2, 3],
            &[Bounds::new(0.0, 2.0).unwrap(), Bounds::new(0.0, 3.0).unwrap()],
        )
        .unwrap();
        for index in [[0, 0], [0, 1], [0, 1], [1, 2], [1, 2], [1, 2]] {
            hist.increment_frequency(&index).unwrap();
        }
        hist
    }

    #[test]
    fn test_marginal_frequencies() {
        let hist = sample_histogram();
        assert_eq!(hist.marginal_frequencies(0).unwrap(), vec![3, 3]);
        assert_eq!(hist.marginal_frequencies(1).unwrap(), vec![1, 2, 3]);
        assert_eq!(hist.marginal_frequency(1, 2).unwrap(), 3);

        assert!(hist.marginal_frequencies(2).is_err());
        assert!(hist.marginal_frequency(1, 3).is_err());
    }

    #[test]
    fn test_quantile() {
        let hist = sample_histogram();
        // Dimension 1 marginals [1, 2, 3] over unit-width bins
        assert_relative_eq!(hist.quantile(1, 0.0).unwrap(), 0.0);
        assert_relative_eq!(hist.quantile(1, 0.5).unwrap(), 2.0);
        assert_relative_eq!(hist.quantile(1, 1.0).unwrap(), 3.0);
        // Halfway through the middle bin: target 2 of 6, cumulative 1, bin holds 2
        assert_relative_eq!(hist.quantile(1, 2.0 / 6.0).unwrap(), 1.5);
    }

    #[test]
    fn test_quantile_skips_empty_bins() {
        let mut hist = Histogram::new(&[4], &[Bounds::new(0.0, 4.0).unwrap()]).unwrap();
        hist.increment_frequency(&[2]).unwrap();
        assert_relative_eq!(hist.quantile(0, 0.0).unwrap(), 2.0);
        assert_relative_eq!(hist.quantile(0, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_quantile_errors_and_empty() {
        let hist = sample_histogram();
        assert!(hist.quantile(0, 1.5).is_err());
        assert!(hist.quantile(0, -0.1).is_err());

        let empty = Histogram::new(&[3], &[Bounds::new(-1.0, 1.0).unwrap()]).unwrap();
        assert_eq!(empty.quantile(0, 0.5).unwrap(), -1.0);
    }

    #[test]
    fn test_mean() {
        let hist = sample_histogram();
        // Centers 0.5 and 1.5, equal weight
        assert_relative_eq!(hist.mean(0).unwrap(), 1.0);
        // (1 * 0.5 + 2 * 1.5 + 3 * 2.5) / 6
        assert_relative_eq!(hist.mean(1).unwrap(), 11.0 / 6.0);

        let empty = Histogram::new(&[3], &[Bounds::new(-1.0, 3.0).unwrap()]).unwrap();
        assert_relative_eq!(empty.mean(0).unwrap(), 1.0);
    }

    #[test]
    fn test_summaries_over_huge_range() {
        let mut hist = Histogram::new(&[2], &[Bounds::new(-1e308, 1e308).unwrap()]).unwrap();
        hist.increment_frequency(&[1]).unwrap();
        hist.increment_frequency(&[1]).unwrap();

        assert_relative_eq!(hist.mean(0).unwrap(), 5e307);
        assert_relative_eq!(hist.quantile(0, 0.5).unwrap(), 5e307);

        let mut single =
            Histogram::new(&[1], &[Bounds::new(-1e308, 1e308).unwrap()]).unwrap();
        single.increment_frequency(&[0]).unwrap();
        assert_eq!(single.quantile(0, 0.5).unwrap(), 0.0);
        assert_eq!(single.mean(0).unwrap(), 0.0);
    }
}
