//! Record shape and schema descriptors
//!
//! The collector accepts one homogeneous record layout, fixed at
//! construction. Composite records must be packed into a single scalar
//! field upstream before they reach the collector.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Payload dimensions of a single record.
///
/// Empty dimensions denote a scalar record (one element). Every dimension
/// must be positive; zero-sized records are rejected so shape validation
/// stays meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordShape {
    dims: Vec<usize>,
}

impl RecordShape {
    /// Create a shape from explicit dimensions.
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.iter().any(|&d| d == 0) {
            return Err(Error::InvalidParameter(
                "record shape dimensions must be positive".to_string(),
            ));
        }
        Ok(Self { dims })
    }

    /// A scalar record: one element, no dimensions.
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// The shape's dimensions.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of payload elements in one record.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// True for a dimensionless (single-element) record.
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }
}

/// Input record layout as seen by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordSchema {
    /// A single homogeneous field of fixed shape
    Scalar(RecordShape),
    /// Named nested fields; not collectable until packed into one field
    Struct(Vec<(String, RecordSchema)>),
}

impl RecordSchema {
    /// The scalar shape behind this schema, or an error for composite input.
    pub fn as_scalar(&self) -> Result<&RecordShape> {
        match self {
            RecordSchema::Scalar(shape) => Ok(shape),
            RecordSchema::Struct(fields) => Err(Error::InvalidParameter(format!(
                "expected a packed scalar record, got a struct of {} fields",
                fields.len()
            ))),
        }
    }
}
