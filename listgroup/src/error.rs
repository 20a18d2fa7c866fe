//! Error types.

use thiserror::Error;

/// A route pattern that failed to compile as a regular expression.
#[derive(Debug, Clone, Error)]
#[error("invalid route pattern '{pattern}': {source}")]
pub struct RoutePatternError {
    /// The pattern text as configured.
    pub pattern: String,
    /// The underlying regex compilation error.
    pub source: regex::Error,
}
