//! Observability for Sift.
//! `tracing` crate with `EnvFilter`, configurable through `SIFT_LOG`.

pub mod fields;
pub mod setup;

pub use setup::{filter_directives, init_tracing, init_tracing_with};
