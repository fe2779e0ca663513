//! Equivalence-key deduplication.
//!
//! Two elements are duplicates when their keys are equal; the first element
//! seen for each key is kept and the relative order of first occurrences is
//! preserved. The key is authoritative: elements that differ in value but
//! share a key are still duplicates.

pub mod dedup;
pub mod errors;
pub mod list;
pub mod set;

pub use dedup::{copy, dedup_by_key, in_place, same};
pub use errors::Errors;
pub use list::List;
pub use set::Set;
