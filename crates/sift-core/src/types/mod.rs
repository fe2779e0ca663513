//! Collection types shared across Sift.

pub mod collections;

pub use collections::FxHashSet;
