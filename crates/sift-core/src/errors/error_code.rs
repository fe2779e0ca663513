//! SiftErrorCode trait for stable, machine-readable error codes.

/// Every Sift error type implements this to expose a structured
/// error code string alongside its human-readable message.
pub trait SiftErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRAVERSE_FAILED: &str = "TRAVERSE_FAILED";
pub const PARTIAL_FAILURE: &str = "PARTIAL_FAILURE";
