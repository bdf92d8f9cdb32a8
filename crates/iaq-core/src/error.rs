//! Error types for iaq-core.
//!
//! The engine has exactly one failure mode of its own: a degenerate
//! native range reaching the remapper. Everything else (missing readings,
//! zero aggregation weight) is an absence, expressed as `Option`, not an
//! error. The deliberate effect is that `NaN` and infinities can never
//! leak into a stored or displayed report.

use thiserror::Error;

/// Errors produced by the evaluation engine.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error
/// variants in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A native threshold range has `min == max`, so no linear projection
    /// onto the canonical scale exists. Callers treat this per-parameter:
    /// the parameter keeps its raw value and classification but
    /// contributes no IAQI.
    #[error("degenerate native range: min {min} equals max {max}")]
    DegenerateRange {
        /// Lower bound of the offending range.
        min: f64,
        /// Upper bound of the offending range.
        max: f64,
    },
}

/// Result type alias using iaq-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DegenerateRange { min: 5.0, max: 5.0 };
        assert_eq!(err.to_string(), "degenerate native range: min 5 equals max 5");
    }
}
