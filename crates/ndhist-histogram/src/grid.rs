//! Index arithmetic for a rectangular grid of bins
//!
//! Bins are flattened in row-major order: the last dimension varies fastest.
//! For a grid of size `[s0, s1, s2]` the bin `[i, j, k]` lives at linear
//! index `i * s1 * s2 + j * s2 + k`.

use ndhist_core::{Error, Result};

/// Shape of a histogram grid together with its row-major strides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinGrid {
    size: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
}

impl BinGrid {
    /// Create a grid with `size[d]` bins along dimension `d`
    ///
    /// Every entry of `size` must be at least one, and the total number of
    /// bins must be addressable.
    pub fn new(size: &[usize]) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidParameter(
                "Histogram must have at least one dimension".to_string(),
            ));
        }
        if let Some(d) = size.iter().position(|&s| s == 0) {
            return Err(Error::InvalidParameter(format!(
                "Dimension {d} has zero bins"
            )));
        }

        let mut strides = vec![0; size.len()];
        let mut len = 1usize;
        for d in (0..size.len()).rev() {
            strides[d] = len;
            len = len.checked_mul(size[d]).ok_or_else(|| {
                Error::InvalidParameter(format!("Grid of size {size:?} has too many bins"))
            })?;
        }

        Ok(Self {
            size: size.to_vec(),
            strides,
            len,
        })
    }

    /// The grid with no dimensions and no bins
    pub fn unsized_grid() -> Self {
        Self::default()
    }

    /// Number of dimensions
    pub fn dimension(&self) -> usize {
        self.size.len()
    }

    /// Bins per dimension
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Row-major strides
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of bins (0 for the unsized grid)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the grid has no bins
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fail unless `index` addresses a bin of this grid
    pub fn check_index(&self, index: &[usize]) -> Result<()> {
        Error::check_dimension(self.dimension(), index.len())?;
        for (dimension, (&i, &size)) in index.iter().zip(&self.size).enumerate() {
            if i >= size {
                return Err(Error::OutOfRange {
                    dimension,
                    index: i,
                    size,
                });
            }
        }
        Ok(())
    }

    /// Flatten a multi-index
    pub fn linear_index(&self, index: &[usize]) -> Result<usize> {
        self.check_index(index)?;
        Ok(index.iter().zip(&self.strides).map(|(i, s)| i * s).sum())
    }

    /// Expand a linear index into its multi-index
    pub fn multi_index(&self, linear: usize) -> Result<Vec<usize>> {
        if linear >= self.len {
            return Err(Error::LinearIndexOutOfRange {
                index: linear,
                len: self.len,
            });
        }
        let mut remainder = linear;
        Ok(self
            .strides
            .iter()
            .map(|&stride| {
                let i = remainder / stride;
                remainder %= stride;
                i
            })
            .collect())
    }

    /// Step `index` to the next bin in linear order
    ///
    /// Returns `false` once the index wraps past the last bin, leaving it at
    /// all zeros.
    pub fn advance(&self, index: &mut [usize]) -> bool {
        for d in (0..index.len()).rev() {
            index[d] += 1;
            if index[d] < self.size[d] {
                return true;
            }
            index[d] = 0;
        }
        false
    }
}
