//! Native-unit threshold ranges for parameter standards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::severity::Severity;

/// One severity bucket of a parameter standard, in the parameter's
/// native unit.
///
/// The range is half-open: a value `v` belongs to this threshold when
/// `min <= v < max`. Threshold lists are authored ascending by severity
/// and are expected to partition a contiguous domain without overlap;
/// overlap is a configuration error that evaluation tolerates rather than
/// rejects (last entry wins during resolution).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Threshold {
    /// Severity bucket this range maps to.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub severity: Severity,
    /// Display color, hex RGB.
    pub color: String,
    /// Inclusive lower bound, native unit.
    pub min: f64,
    /// Exclusive upper bound, native unit.
    pub max: f64,
}

impl Threshold {
    /// Create a threshold with the bucket's standard display color.
    #[must_use]
    pub fn new(severity: Severity, min: f64, max: f64) -> Self {
        Self {
            severity,
            color: severity.color().to_string(),
            min,
            max,
        }
    }

    /// Whether `value` falls inside this half-open range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }

    /// Check the range is finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] unless `min < max` with both
    /// bounds finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                severity: self.severity,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let t = Threshold::new(Severity::Moderate, 50.0, 100.0);
        assert!(t.contains(50.0));
        assert!(t.contains(99.999));
        assert!(!t.contains(100.0));
        assert!(!t.contains(49.999));
    }

    #[test]
    fn test_contains_negative_values() {
        let t = Threshold::new(Severity::Good, -40.0, 0.0);
        assert!(t.contains(-10.0));
        assert!(!t.contains(0.0));
    }

    #[test]
    fn test_new_uses_bucket_color() {
        let t = Threshold::new(Severity::Hazardous, 300.0, 500.0);
        assert_eq!(t.color, "#7e0023");
    }

    #[test]
    fn test_validate() {
        assert!(Threshold::new(Severity::Good, 0.0, 50.0).validate().is_ok());
        assert!(Threshold::new(Severity::Good, 50.0, 50.0).validate().is_err());
        assert!(Threshold::new(Severity::Good, 60.0, 50.0).validate().is_err());
        assert!(
            Threshold::new(Severity::Good, 0.0, f64::INFINITY)
                .validate()
                .is_err()
        );
        assert!(
            Threshold::new(Severity::Good, f64::NAN, 50.0)
                .validate()
                .is_err()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_name_key() {
        let t = Threshold::new(Severity::Good, 0.0, 50.0);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"name\":\"good\""));

        let parsed: Threshold = serde_json::from_str(
            r##"{"name":"unhealthy","color":"#ff0000","min":100,"max":500}"##,
        )
        .unwrap();
        assert_eq!(parsed.severity, Severity::Unhealthy);
        assert_eq!(parsed.min, 100.0);
    }
}
