//! Last-N window collection for streaming feature pipelines
//!
//! This crate provides a fixed-capacity reservoir that accumulates the
//! most recent N records seen from an unbounded record stream, updated in
//! batches by a host execution engine (typically once per training step):
//! - Record schema layer (scalar shapes, composite inputs rejected)
//! - Packed sample batches in host-engine layout
//! - The window collector itself, with slot-order and chronological
//!   read-out and a lifetime visited counter
//! - Serde persistence of collector state for checkpoint/restore
//!
//! The collector is plain non-trainable state: nothing is differentiated
//! through it, and it is not safe for concurrent use (one serial caller
//! per instance).
//!
//! # Example
//!
//! ```
//! use recolectar::{LastNWindowCollector, RecordSchema, RecordShape, WindowState};
//!
//! let schema = RecordSchema::Scalar(RecordShape::scalar());
//! let mut window = LastNWindowCollector::new(3, &schema).unwrap();
//!
//! // Stream five scalar records through a capacity-3 window
//! for v in [1.0_f32, 2.0, 3.0, 4.0, 5.0] {
//!     window.collect(&[vec![v]]).unwrap();
//! }
//!
//! assert_eq!(window.num_visited(), 5);
//! assert_eq!(window.state(), WindowState::Full);
//! assert_eq!(window.chronological(), vec![&[3.0][..], &[4.0][..], &[5.0][..]]);
//! ```

mod batch;
mod collector;
mod error;
mod schema;

pub use batch::SampleBatch;
pub use collector::{CollectorOutput, LastNWindowCollector, SyncHandle, WindowState};
pub use error::{Error, Result};
pub use schema::{RecordSchema, RecordShape};
