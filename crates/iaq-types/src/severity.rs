//! Severity buckets for air-quality classification.

use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Severity bucket on the IAQI scale.
///
/// Every threshold — device-specific or canonical — is named after one of
/// these six buckets. They are the only bucket names the system defines.
///
/// # Ordering
///
/// Variants are ordered from best to worst air quality, so threshold
/// comparisons read naturally:
///
/// ```
/// use iaq_types::Severity;
///
/// assert!(Severity::Hazardous > Severity::Unhealthy);
/// assert!(Severity::Good < Severity::Moderate);
/// ```
///
/// # Serialization
///
/// Serde uses kebab-case strings (`"sensitive-unhealthy"`), matching the
/// names used in stored parameter-standard documents. `Display` renders
/// human-readable labels instead (`"Unhealthy for Sensitive Groups"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Severity {
    /// Air quality is satisfactory.
    Good,
    /// Acceptable quality; a small concern for unusually sensitive people.
    Moderate,
    /// Members of sensitive groups may experience health effects.
    SensitiveUnhealthy,
    /// Everyone may begin to experience health effects.
    Unhealthy,
    /// Health alert; everyone may experience more serious effects.
    VeryUnhealthy,
    /// Health warning of emergency conditions.
    Hazardous,
}

impl Severity {
    /// All six buckets, ordered from best to worst.
    pub const ALL: [Severity; 6] = [
        Severity::Good,
        Severity::Moderate,
        Severity::SensitiveUnhealthy,
        Severity::Unhealthy,
        Severity::VeryUnhealthy,
        Severity::Hazardous,
    ];

    /// The kebab-case name used in stored configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Moderate => "moderate",
            Severity::SensitiveUnhealthy => "sensitive-unhealthy",
            Severity::Unhealthy => "unhealthy",
            Severity::VeryUnhealthy => "very-unhealthy",
            Severity::Hazardous => "hazardous",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::SensitiveUnhealthy => "Unhealthy for Sensitive Groups",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
        }
    }

    /// Display color associated with this bucket (hex RGB).
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Good => "#00e400",
            Severity::Moderate => "#ffff00",
            Severity::SensitiveUnhealthy => "#ff7e00",
            Severity::Unhealthy => "#ff0000",
            Severity::VeryUnhealthy => "#8f3f97",
            Severity::Hazardous => "#7e0023",
        }
    }

    /// Whether a reading in this bucket is acceptable.
    ///
    /// The first three buckets (good, moderate, sensitive-unhealthy) are
    /// acceptable; the last three trigger warnings downstream.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self,
            Severity::Good | Severity::Moderate | Severity::SensitiveUnhealthy
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Parse a severity from its kebab-case configuration name.
    ///
    /// Matching is case-insensitive and accepts `_` in place of `-`.
    ///
    /// ```
    /// use iaq_types::Severity;
    ///
    /// assert_eq!("good".parse(), Ok(Severity::Good));
    /// assert_eq!("SENSITIVE_UNHEALTHY".parse(), Ok(Severity::SensitiveUnhealthy));
    /// assert!("fine".parse::<Severity>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Severity::ALL
            .iter()
            .find(|sev| sev.as_str() == normalized)
            .copied()
            .ok_or_else(|| ConfigError::UnknownSeverity(s.to_string()))
    }
}
