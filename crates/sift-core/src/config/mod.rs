//! Configuration system for Sift.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod aggregator_config;
pub mod logging_config;
pub mod sift_config;

pub use aggregator_config::AggregatorConfig;
pub use logging_config::LoggingConfig;
pub use sift_config::SiftConfig;
