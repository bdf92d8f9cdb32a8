//! Typed sensor readings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parameter::ParameterName;

/// One reading from a device, with a typed field per catalog parameter.
///
/// Ingestion and reporting collaborators resolve their payload keys into
/// these fields once at the boundary; evaluation then accesses values only
/// through [`value_of`](Self::value_of), never by string key.
///
/// `None` means the device did not report the parameter. Note that the
/// evaluator also treats a reported `0.0` as "no reading" — see the
/// evaluator documentation for that preserved quirk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reading {
    /// Fine particulate matter, µg/m³.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pm25: Option<f64>,
    /// Coarse particulate matter, µg/m³.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pm10: Option<f64>,
    /// Carbon dioxide, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub co2: Option<f64>,
    /// Carbon monoxide, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub co: Option<f64>,
    /// Methane, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ch4: Option<f64>,
    /// Ammonium, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nh4: Option<f64>,
    /// Total volatile organic compounds, ppb.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tvoc: Option<f64>,
    /// Liquefied petroleum gas, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lpg: Option<f64>,
    /// Alcohol vapor, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub alcohol: Option<f64>,
    /// Toluene, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub toluene: Option<f64>,
    /// Acetone, ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub acetone: Option<f64>,
    /// Air temperature, °C.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub humidity: Option<f64>,
    /// When the reading was captured, if known.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub captured_at: Option<time::OffsetDateTime>,
}

impl Reading {
    /// Create a builder for constructing a reading.
    pub fn builder() -> ReadingBuilder {
        ReadingBuilder::default()
    }

    /// The raw value reported for `parameter`, if any.
    #[must_use]
    pub fn value_of(&self, parameter: ParameterName) -> Option<f64> {
        match parameter {
            ParameterName::Pm25 => self.pm25,
            ParameterName::Pm10 => self.pm10,
            ParameterName::Co2 => self.co2,
            ParameterName::Co => self.co,
            ParameterName::Ch4 => self.ch4,
            ParameterName::Nh4 => self.nh4,
            ParameterName::Tvoc => self.tvoc,
            ParameterName::Lpg => self.lpg,
            ParameterName::Alcohol => self.alcohol,
            ParameterName::Toluene => self.toluene,
            ParameterName::Acetone => self.acetone,
            ParameterName::Temperature => self.temperature,
            ParameterName::Humidity => self.humidity,
        }
    }

    /// Set the value for `parameter`, replacing any previous value.
    pub fn set(&mut self, parameter: ParameterName, value: f64) {
        let field = match parameter {
            ParameterName::Pm25 => &mut self.pm25,
            ParameterName::Pm10 => &mut self.pm10,
            ParameterName::Co2 => &mut self.co2,
            ParameterName::Co => &mut self.co,
            ParameterName::Ch4 => &mut self.ch4,
            ParameterName::Nh4 => &mut self.nh4,
            ParameterName::Tvoc => &mut self.tvoc,
            ParameterName::Lpg => &mut self.lpg,
            ParameterName::Alcohol => &mut self.alcohol,
            ParameterName::Toluene => &mut self.toluene,
            ParameterName::Acetone => &mut self.acetone,
            ParameterName::Temperature => &mut self.temperature,
            ParameterName::Humidity => &mut self.humidity,
        };
        *field = Some(value);
    }

    /// Whether no parameter carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ParameterName::ALL
            .iter()
            .all(|p| self.value_of(*p).is_none())
    }
}

/// Builder for [`Reading`].
#[derive(Debug, Default, Clone, Copy)]
#[must_use]
pub struct ReadingBuilder {
    reading: Reading,
}

impl ReadingBuilder {
    /// Set the value for any catalog parameter.
    pub fn value(mut self, parameter: ParameterName, value: f64) -> Self {
        self.reading.set(parameter, value);
        self
    }

    /// Set fine particulate matter (µg/m³).
    pub fn pm25(mut self, value: f64) -> Self {
        self.reading.pm25 = Some(value);
        self
    }

    /// Set coarse particulate matter (µg/m³).
    pub fn pm10(mut self, value: f64) -> Self {
        self.reading.pm10 = Some(value);
        self
    }

    /// Set carbon dioxide (ppm).
    pub fn co2(mut self, value: f64) -> Self {
        self.reading.co2 = Some(value);
        self
    }

    /// Set carbon monoxide (ppm).
    pub fn co(mut self, value: f64) -> Self {
        self.reading.co = Some(value);
        self
    }

    /// Set air temperature (°C).
    pub fn temperature(mut self, value: f64) -> Self {
        self.reading.temperature = Some(value);
        self
    }

    /// Set relative humidity (percent).
    pub fn humidity(mut self, value: f64) -> Self {
        self.reading.humidity = Some(value);
        self
    }

    /// Set the capture timestamp.
    pub fn captured_at(mut self, timestamp: time::OffsetDateTime) -> Self {
        self.reading.captured_at = Some(timestamp);
        self
    }

    /// Build the reading.
    #[must_use]
    pub fn build(self) -> Reading {
        self.reading
    }
}
