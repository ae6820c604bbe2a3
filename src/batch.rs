//! Packed sample batches
//!
//! A `SampleBatch` is the host-engine form of one update's worth of
//! records: a flat payload holding `num_records` consecutive records of a
//! shared shape.

use crate::error::{Error, Result};
use crate::schema::RecordShape;
use serde::{Deserialize, Serialize};

/// A flat, packed batch of fixed-shape records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBatch<T> {
    data: Vec<T>,
    shape: RecordShape,
}

impl<T> SampleBatch<T> {
    /// Create a batch from a flat payload.
    ///
    /// The payload length must be a whole number of records.
    pub fn new(data: Vec<T>, shape: RecordShape) -> Result<Self> {
        let width = shape.num_elements();
        if data.len() % width != 0 {
            return Err(Error::ShapeMismatch {
                expected: vec![width],
                got: vec![data.len() % width],
            });
        }
        Ok(Self { data, shape })
    }

    /// An empty batch of the given record shape.
    pub fn empty(shape: RecordShape) -> Self {
        Self { data: Vec::new(), shape }
    }

    /// Number of records in the batch.
    pub fn num_records(&self) -> usize {
        self.data.len() / self.shape.num_elements()
    }

    /// Check if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Per-record shape shared by every record in the batch.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// Iterate over the records as contiguous payload slices.
    pub fn records(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.shape.num_elements())
    }

    /// The flat payload.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}
