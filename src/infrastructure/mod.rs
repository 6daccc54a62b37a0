//! Infrastructure layer
//!
//! Implementations of the external concerns the generators rely on: the
//! fake-data provider and the output sinks.

pub mod faker;
pub mod log_messages;
pub mod sink;

pub use faker::FakerProvider;
pub use sink::{EventSink, MemorySink, StdoutSink, WriterSink};
