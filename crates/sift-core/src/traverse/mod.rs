//! Collecting the outcomes of parallel traversal steps.
//! One shared `ErrorAggregator` per run; workers report, one owner finishes.

pub mod aggregator;
pub mod sink;

pub use aggregator::ErrorAggregator;
pub use sink::{DisplayFields, ErrorSink, Field, NoopSink, TracingSink};

/// `tracing` target used for every event emitted by this module.
pub const TARGET: &str = "sift::traverse";
