//! sift-core: equivalence-key deduplication and concurrent error
//! aggregation for parallel traversal pipelines.
//!
//! - [`unique`]: `copy`, `in_place`, `List`, `Set` and the unique error set.
//! - [`traverse`]: `ErrorAggregator`, the shared collector workers report to.
//! - [`errors`]: combined, partial and classified failure types.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traverse;
pub mod types;
pub mod unique;

pub use errors::{CombinedError, PartialError, TraverseError};
pub use traverse::{ErrorAggregator, Field};
