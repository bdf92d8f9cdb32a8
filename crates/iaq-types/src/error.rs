//! Error types for iaq-types.

use thiserror::Error;

use crate::severity::Severity;

/// Errors raised while validating or parsing configuration values.
///
/// These surface at the construction boundary (parameter standards,
/// severity/parameter name parsing), never during evaluation itself.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A parameter standard was built without any thresholds.
    #[error("parameter standard '{parameter}' has no thresholds")]
    EmptyThresholds {
        /// Display name of the offending parameter.
        parameter: String,
    },

    /// A threshold range is empty, inverted, or non-finite.
    #[error("threshold '{severity}' has invalid range: min {min} must be below max {max}")]
    InvalidRange {
        /// Severity bucket carrying the bad range.
        severity: Severity,
        /// Lower bound as authored.
        min: f64,
        /// Upper bound as authored.
        max: f64,
    },

    /// A parameter weight is negative or non-finite.
    #[error("invalid weight {weight}: must be finite and non-negative")]
    InvalidWeight {
        /// The weight as authored.
        weight: f64,
    },

    /// A severity name did not match any of the six defined buckets.
    #[error("unknown severity level: '{0}'")]
    UnknownSeverity(String),

    /// A parameter name did not match the parameter catalog.
    #[error("unknown parameter name: '{0}'")]
    UnknownParameter(String),
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::EmptyThresholds {
            parameter: "PM2.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parameter standard 'PM2.5' has no thresholds"
        );

        let err = ConfigError::InvalidRange {
            severity: Severity::Good,
            min: 50.0,
            max: 50.0,
        };
        assert!(err.to_string().contains("min 50 must be below max 50"));

        let err = ConfigError::UnknownSeverity("fine".to_string());
        assert!(err.to_string().contains("fine"));
    }

    #[test]
    fn test_error_equality() {
        let a = ConfigError::InvalidWeight { weight: -1.0 };
        let b = ConfigError::InvalidWeight { weight: -1.0 };
        assert_eq!(a, b);
    }
}
