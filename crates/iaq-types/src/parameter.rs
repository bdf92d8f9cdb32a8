//! Parameter catalog and device-level parameter standards.

use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::severity::Severity;
use crate::threshold::Threshold;

/// A sensor parameter known to the system.
///
/// This is a closed catalog: readings carry one typed field per variant
/// and evaluation never resolves parameters by runtime string lookup.
/// Names arriving from outside (stored standards, payload keys) are parsed
/// once at the boundary via [`ParameterName::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParameterName {
    /// Fine particulate matter, 2.5 µm.
    Pm25,
    /// Coarse particulate matter, 10 µm.
    Pm10,
    /// Carbon dioxide.
    Co2,
    /// Carbon monoxide.
    Co,
    /// Methane.
    Ch4,
    /// Ammonium.
    Nh4,
    /// Total volatile organic compounds.
    Tvoc,
    /// Liquefied petroleum gas.
    Lpg,
    /// Alcohol vapor.
    Alcohol,
    /// Toluene.
    Toluene,
    /// Acetone.
    Acetone,
    /// Air temperature.
    Temperature,
    /// Relative humidity.
    Humidity,
}

impl ParameterName {
    /// Every catalog parameter.
    pub const ALL: [ParameterName; 13] = [
        ParameterName::Pm25,
        ParameterName::Pm10,
        ParameterName::Co2,
        ParameterName::Co,
        ParameterName::Ch4,
        ParameterName::Nh4,
        ParameterName::Tvoc,
        ParameterName::Lpg,
        ParameterName::Alcohol,
        ParameterName::Toluene,
        ParameterName::Acetone,
        ParameterName::Temperature,
        ParameterName::Humidity,
    ];

    /// The lowercase key used for reading fields and stored documents.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            ParameterName::Pm25 => "pm25",
            ParameterName::Pm10 => "pm10",
            ParameterName::Co2 => "co2",
            ParameterName::Co => "co",
            ParameterName::Ch4 => "ch4",
            ParameterName::Nh4 => "nh4",
            ParameterName::Tvoc => "tvoc",
            ParameterName::Lpg => "lpg",
            ParameterName::Alcohol => "alcohol",
            ParameterName::Toluene => "toluene",
            ParameterName::Acetone => "acetone",
            ParameterName::Temperature => "temperature",
            ParameterName::Humidity => "humidity",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ParameterName::Pm25 => "PM2.5",
            ParameterName::Pm10 => "PM10",
            ParameterName::Co2 => "CO2",
            ParameterName::Co => "CO",
            ParameterName::Ch4 => "CH4",
            ParameterName::Nh4 => "NH4",
            ParameterName::Tvoc => "TVOC",
            ParameterName::Lpg => "LPG",
            ParameterName::Alcohol => "Alcohol",
            ParameterName::Toluene => "Toluene",
            ParameterName::Acetone => "Acetone",
            ParameterName::Temperature => "Temperature",
            ParameterName::Humidity => "Humidity",
        }
    }

    /// Default aggregation weight for this parameter.
    ///
    /// Parameters weighted `0.0` are reported informationally but excluded
    /// from the overall index (their native unit does not normalize
    /// meaningfully onto the IAQI scale).
    #[must_use]
    pub fn default_weight(&self) -> f64 {
        match self {
            ParameterName::Co => 3.0,
            ParameterName::Pm25 | ParameterName::Co2 => 2.0,
            ParameterName::Tvoc | ParameterName::Temperature | ParameterName::Humidity => 1.0,
            _ => 0.0,
        }
    }

    /// Parse a parameter name from a display name or reading key.
    ///
    /// Matching is case-insensitive and ignores dots, so `"PM2.5"`,
    /// `"pm2.5"`, and `"pm25"` all resolve to [`ParameterName::Pm25`].
    /// Legacy spellings `"toluen"` and `"aceton"` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use iaq_types::ParameterName;
    ///
    /// assert_eq!(ParameterName::from_name("PM2.5"), Some(ParameterName::Pm25));
    /// assert_eq!(ParameterName::from_name("co2"), Some(ParameterName::Co2));
    /// assert_eq!(ParameterName::from_name("Toluen"), Some(ParameterName::Toluene));
    /// assert_eq!(ParameterName::from_name("radon"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.to_lowercase().replace('.', "");
        match key.as_str() {
            "toluen" => return Some(ParameterName::Toluene),
            "aceton" => return Some(ParameterName::Acetone),
            _ => {}
        }
        Self::ALL.iter().find(|p| p.as_key() == key).copied()
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ParameterName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownParameter(s.to_string()))
    }
}

/// Device-level configuration for one parameter.
///
/// Authored by admins and fetched by collaborators at evaluation time; the
/// engine only ever receives already-resolved standards. The `thresholds`
/// list partitions the parameter's native domain into half-open severity
/// buckets, ascending by severity.
///
/// Evaluation assumes a non-empty, well-formed threshold list. Validate at
/// the construction boundary with [`ParameterStandard::validate`] or build
/// through [`ParameterStandard::builder`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterStandard {
    /// Which catalog parameter this standard applies to.
    pub name: ParameterName,
    /// Native measurement unit, for display only.
    pub unit: String,
    /// Aggregation weight; `0.0` excludes the parameter from the overall
    /// index while still reporting it.
    pub weight: f64,
    /// Severity buckets in the parameter's native unit.
    pub thresholds: Vec<Threshold>,
}

impl ParameterStandard {
    /// Create a builder for constructing a validated standard.
    pub fn builder(name: ParameterName) -> ParameterStandardBuilder {
        ParameterStandardBuilder::new(name)
    }

    /// Check the standard satisfies the evaluation preconditions.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyThresholds`] if the threshold list is empty.
    /// - [`ConfigError::InvalidRange`] if any threshold range is empty,
    ///   inverted, or non-finite.
    /// - [`ConfigError::InvalidWeight`] if the weight is negative or
    ///   non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds {
                parameter: self.name.display_name().to_string(),
            });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                weight: self.weight,
            });
        }
        for threshold in &self.thresholds {
            threshold.validate()?;
        }
        Ok(())
    }
}

/// Builder for [`ParameterStandard`].
///
/// Use [`try_build`](Self::try_build) to get construction-time validation,
/// or [`build`](Self::build) when the inputs are known-good (tests,
/// constants).
#[derive(Debug, Clone)]
#[must_use]
pub struct ParameterStandardBuilder {
    standard: ParameterStandard,
}

impl ParameterStandardBuilder {
    fn new(name: ParameterName) -> Self {
        Self {
            standard: ParameterStandard {
                name,
                unit: String::new(),
                weight: name.default_weight(),
                thresholds: Vec::new(),
            },
        }
    }

    /// Set the native unit.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.standard.unit = unit.into();
        self
    }

    /// Override the default aggregation weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.standard.weight = weight;
        self
    }

    /// Append a threshold bucket with the severity's standard color.
    pub fn threshold(mut self, severity: Severity, min: f64, max: f64) -> Self {
        self.standard.thresholds.push(Threshold::new(severity, min, max));
        self
    }

    /// Build without validation.
    #[must_use]
    pub fn build(self) -> ParameterStandard {
        self.standard
    }

    /// Build with validation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`ParameterStandard::validate`].
    pub fn try_build(self) -> Result<ParameterStandard, ConfigError> {
        self.standard.validate()?;
        Ok(self.standard)
    }
}
