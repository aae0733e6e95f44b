//! Sample sources: ordered collections of measurement vectors
//!
//! A histogram is populated from anything that can hand out measurement
//! vectors by position and report how many it holds. The source declares a
//! measurement vector size; sources that cannot enforce it on every element
//! (nested `Vec`s) leave the per-vector check to the consumer.

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use std::iter::FusedIterator;

/// Read-only, ordered access to a collection of measurement vectors
pub trait SampleSource {
    /// Component type of every measurement vector
    type Measurement: Numeric;

    /// Number of components each measurement vector is declared to have
    fn measurement_vector_size(&self) -> usize;

    /// Number of measurement vectors in the sample
    fn len(&self) -> usize;

    /// Check if the sample holds no measurement vectors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the measurement vector with the given identifier
    fn measurement_vector(&self, id: usize) -> Option<&[Self::Measurement]>;

    /// Iterate over all measurement vectors in order
    fn measurement_vectors(&self) -> MeasurementVectors<'_, Self> {
        MeasurementVectors {
            source: self,
            next: 0,
        }
    }
}

/// Iterator over the measurement vectors of a [`SampleSource`]
pub struct MeasurementVectors<'a, S: SampleSource + ?Sized> {
    source: &'a S,
    next: usize,
}

impl<'a, S: SampleSource + ?Sized> Iterator for MeasurementVectors<'a, S> {
    type Item = &'a [S::Measurement];

    fn next(&mut self) -> Option<Self::Item> {
        let vector = self.source.measurement_vector(self.next)?;
        self.next += 1;
        Some(vector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a, S: SampleSource + ?Sized> ExactSizeIterator for MeasurementVectors<'a, S> {}

impl<'a, S: SampleSource + ?Sized> FusedIterator for MeasurementVectors<'a, S> {}

/// A growable sample with a fixed measurement vector size
///
/// Vectors are stored back to back in a single buffer, so every vector is
/// guaranteed to have exactly `measurement_vector_size` components.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSample<T: Numeric> {
    measurement_vector_size: usize,
    data: Vec<T>,
}

impl<T: Numeric> ListSample<T> {
    /// Create an empty sample whose vectors have `measurement_vector_size` components
    pub fn new(measurement_vector_size: usize) -> Self {
        Self {
            measurement_vector_size,
            data: Vec::new(),
        }
    }

    /// Create an empty sample with room for `capacity` vectors
    pub fn with_capacity(measurement_vector_size: usize, capacity: usize) -> Self {
        Self {
            measurement_vector_size,
            data: Vec::with_capacity(measurement_vector_size * capacity),
        }
    }

    /// Build a sample from a sequence of vectors, checking every length
    pub fn from_vectors<I, V>(measurement_vector_size: usize, vectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[T]>,
    {
        let mut sample = Self::new(measurement_vector_size);
        for vector in vectors {
            sample.push_back(vector.as_ref())?;
        }
        Ok(sample)
    }

    /// Append a measurement vector
    pub fn push_back(&mut self, measurement: &[T]) -> Result<()> {
        Error::check_dimension(self.measurement_vector_size, measurement.len())?;
        self.data.extend_from_slice(measurement);
        Ok(())
    }

    /// Remove every measurement vector, keeping the measurement vector size
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Numeric> SampleSource for ListSample<T> {
    type Measurement = T;

    fn measurement_vector_size(&self) -> usize {
        self.measurement_vector_size
    }

    fn len(&self) -> usize {
        if self.measurement_vector_size == 0 {
            return 0;
        }
        self.data.len() / self.measurement_vector_size
    }

    fn measurement_vector(&self, id: usize) -> Option<&[T]> {
        if self.measurement_vector_size == 0 {
            return None;
        }
        let start = id.checked_mul(self.measurement_vector_size)?;
        let end = start.checked_add(self.measurement_vector_size)?;
        self.data.get(start..end)
    }
}

// Nested vectors: the first vector decides the declared size.
impl<T: Numeric> SampleSource for [Vec<T>] {
    type Measurement = T;

    fn measurement_vector_size(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn len(&self) -> usize {
        <[Vec<T>]>::len(self)
    }

    fn measurement_vector(&self, id: usize) -> Option<&[T]> {
        self.get(id).map(Vec::as_slice)
    }
}

impl<T: Numeric> SampleSource for Vec<Vec<T>> {
    type Measurement = T;

    fn measurement_vector_size(&self) -> usize {
        self.as_slice().measurement_vector_size()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn measurement_vector(&self, id: usize) -> Option<&[T]> {
        self.as_slice().measurement_vector(id)
    }
}

// Fixed-size arrays: the dimension is part of the type.
impl<T: Numeric, const D: usize> SampleSource for [[T; D]] {
    type Measurement = T;

    fn measurement_vector_size(&self) -> usize {
        D
    }

    fn len(&self) -> usize {
        <[[T; D]]>::len(self)
    }

    fn measurement_vector(&self, id: usize) -> Option<&[T]> {
        self.get(id).map(|v| v.as_slice())
    }
}

impl<T: Numeric, const D: usize> SampleSource for Vec<[T; D]> {
    type Measurement = T;

    fn measurement_vector_size(&self) -> usize {
        D
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn measurement_vector(&self, id: usize) -> Option<&[T]> {
        self.as_slice().measurement_vector(id)
    }
}
