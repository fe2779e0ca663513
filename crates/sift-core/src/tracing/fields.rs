//! Structured field names used by Sift events.

/// The recorded error, rendered with `Display`.
pub const ERROR: &str = "error";

/// Caller-supplied context, rendered as `key=value` pairs.
pub const CONTEXT: &str = "fields";

/// Number of units that reported success.
pub const SUCCESSES: &str = "successes";

/// Number of distinct errors recorded.
pub const DISTINCT_ERRORS: &str = "distinct_errors";
