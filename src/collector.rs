//! Last-N window collector
//!
//! Maintains a fixed-capacity reservoir of the most recently observed
//! records from an unbounded stream, updated one batch per call.
//!
//! # Features
//! - O(1) per-record update, appends until full then overwrites oldest
//! - Lifetime visited counter independent of capacity
//! - All-or-nothing batch validation: a failed call mutates nothing
//! - No unsafe code
//!
//! Not safe for concurrent use: one serial caller per instance. The
//! `mutex` slot in [`CollectorOutput`] is a reserved host-interface field,
//! not a locking mechanism.

use crate::error::{Error, Result};
use crate::schema::{RecordSchema, RecordShape};
use crate::batch::SampleBatch;
use serde::{Deserialize, Serialize};

/// Fill state of the reservoir.
///
/// The transition `Filling -> Full` happens once, the first time the
/// lifetime record count reaches capacity, and is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    /// Fewer records seen than capacity; writes append
    Filling,
    /// Reservoir at capacity; writes evict the oldest record
    Full,
}

/// Reserved synchronization slot in the collector's output bundle.
///
/// Kept for interface compatibility with host executors that expect a
/// uniform operator-output shape. Carries no lock: callers must serialize
/// access to the collector externally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncHandle;

/// Structured view of the collector's state for downstream consumers.
#[derive(Debug)]
pub struct CollectorOutput<'a, T> {
    /// Buffer snapshot in slot order (not chronological)
    pub last_n: &'a [Vec<T>],
    /// Lifetime count of records ever submitted
    pub num_visited: u64,
    /// Reserved handle, unused by the collector itself
    pub mutex: &'a SyncHandle,
}

/// Fixed-capacity collector of the last N records from a record stream.
///
/// Records are stored in slot order; once the buffer is full the write
/// cursor marks the oldest slot, and [`chronological`](Self::chronological)
/// reorders on read. The collector is non-trainable state: the host engine
/// invokes [`collect`](Self::collect) once per step and reads the buffer
/// back out, nothing is differentiated through it.
///
/// # Example
///
/// ```
/// use recolectar::{LastNWindowCollector, RecordSchema, RecordShape};
///
/// let schema = RecordSchema::Scalar(RecordShape::new(vec![2]).unwrap());
/// let mut collector = LastNWindowCollector::new(3, &schema).unwrap();
///
/// collector.collect(&[vec![1.0_f32, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(collector.len(), 2);
/// assert_eq!(collector.num_visited(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastNWindowCollector<T> {
    capacity: usize,
    shape: RecordShape,
    buffer: Vec<Vec<T>>,
    cursor: usize,
    num_visited: u64,
    #[serde(skip)]
    sync: SyncHandle,
}

impl<T> LastNWindowCollector<T> {
    /// Create a collector for `capacity` records of the given schema.
    ///
    /// Fails with [`Error::InvalidParameter`] for zero capacity or a
    /// composite schema (composite records must be packed upstream).
    pub fn new(capacity: usize, schema: &RecordSchema) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidParameter(
                "capacity must be positive".to_string(),
            ));
        }
        let shape = schema.as_scalar()?.clone();
        Ok(Self {
            capacity,
            shape,
            buffer: Vec::with_capacity(capacity),
            cursor: 0,
            num_visited: 0,
            sync: SyncHandle,
        })
    }

    /// Maximum number of records retained simultaneously.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Per-record payload shape fixed at construction.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no records have been collected yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Index of the next slot to be written.
    ///
    /// Once the buffer is full this is the slot holding the oldest
    /// remaining record (the next to be evicted).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lifetime count of records ever submitted, unbounded by capacity.
    pub fn num_visited(&self) -> u64 {
        self.num_visited
    }

    /// Current fill state.
    pub fn state(&self) -> WindowState {
        if self.buffer.len() < self.capacity {
            WindowState::Filling
        } else {
            WindowState::Full
        }
    }

    /// Buffer contents as currently stored, in slot order.
    pub fn snapshot(&self) -> &[Vec<T>] {
        &self.buffer
    }

    /// Buffer contents oldest-first.
    pub fn chronological(&self) -> Vec<&[T]> {
        let mut result = Vec::with_capacity(self.buffer.len());
        if self.buffer.len() < self.capacity {
            // Not yet wrapped, slot order is arrival order
            for record in &self.buffer {
                result.push(record.as_slice());
            }
        } else {
            // Wrapped: cursor is the oldest
            for i in 0..self.capacity {
                let idx = (self.cursor + i) % self.capacity;
                result.push(self.buffer[idx].as_slice());
            }
        }
        result
    }

    /// The most recent `n` records, newest first (or all if `n > len`).
    pub fn recent(&self, n: usize) -> Vec<&[T]> {
        let take = n.min(self.buffer.len());
        let mut result = Vec::with_capacity(take);
        for i in 0..take {
            let idx = if self.buffer.len() < self.capacity {
                self.buffer.len() - 1 - i
            } else {
                // cursor points at the oldest, so cursor-1 is newest
                (self.cursor + self.capacity - 1 - i) % self.capacity
            };
            result.push(self.buffer[idx].as_slice());
        }
        result
    }

    /// The three-field state bundle read by downstream consumers.
    pub fn output(&self) -> CollectorOutput<'_, T> {
        CollectorOutput {
            last_n: &self.buffer,
            num_visited: self.num_visited,
            mutex: &self.sync,
        }
    }
}

impl<T: Clone> LastNWindowCollector<T> {
    /// Collect a batch of records, oldest-first, into the window.
    ///
    /// Every record is validated against the collector's shape before any
    /// mutation: a failed call leaves buffer, cursor, and counter exactly
    /// as they were, and the collector stays usable. Batch size is
    /// unbounded; a batch larger than capacity leaves the buffer holding
    /// the batch's last `capacity` records. An empty batch is a no-op.
    pub fn collect<R: AsRef<[T]>>(&mut self, records: &[R]) -> Result<()> {
        let width = self.shape.num_elements();
        for record in records {
            let got = record.as_ref().len();
            if got != width {
                return Err(Error::ShapeMismatch {
                    expected: vec![width],
                    got: vec![got],
                });
            }
        }
        for record in records {
            self.push_record(record.as_ref().to_vec());
        }
        Ok(())
    }

    /// Collect a packed batch.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the batch's record shape
    /// differs from the collector's; the batch's packing already rules out
    /// partial records, so the call is all-or-nothing by construction.
    pub fn collect_packed(&mut self, batch: &SampleBatch<T>) -> Result<()> {
        if batch.shape() != &self.shape {
            return Err(Error::ShapeMismatch {
                expected: self.shape.dims().to_vec(),
                got: batch.shape().dims().to_vec(),
            });
        }
        for record in batch.records() {
            self.push_record(record.to_vec());
        }
        Ok(())
    }

    fn push_record(&mut self, record: Vec<T>) {
        if self.buffer.len() < self.capacity {
            self.buffer.push(record);
        } else {
            // Full: overwrite the oldest slot
            self.buffer[self.cursor] = record;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
        self.num_visited += 1;
    }
}
