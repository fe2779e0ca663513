//! Error handling for Sift.
//! One error type per subsystem, `thiserror` only.

pub mod combined_error;
pub mod config_error;
pub mod error_code;
pub mod partial_error;
pub mod traverse_error;

pub use combined_error::CombinedError;
pub use config_error::ConfigError;
pub use error_code::SiftErrorCode;
pub use partial_error::PartialError;
pub use traverse_error::TraverseError;
