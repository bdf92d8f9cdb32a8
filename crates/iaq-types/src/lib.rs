//! Platform-agnostic types for indoor-air-quality evaluation.
//!
//! This crate provides the shared value types consumed by the evaluation
//! engine (`iaq-core`) and by collaborators that feed it: the severity
//! bucket enumeration, native-unit thresholds, the closed parameter
//! catalog, device-level parameter standards, and typed sensor readings.
//!
//! Everything here is a plain value type with no I/O and no persistent
//! state; configuration validation happens at the construction boundary
//! (builders, [`ParameterStandard::validate`]) so the engine can assume
//! well-formed inputs.
//!
//! # Example
//!
//! ```
//! use iaq_types::{ParameterName, ParameterStandard, Reading, Severity};
//!
//! let standard = ParameterStandard::builder(ParameterName::Pm25)
//!     .unit("µg/m³")
//!     .threshold(Severity::Good, 0.0, 50.0)
//!     .threshold(Severity::Moderate, 50.0, 100.0)
//!     .threshold(Severity::Unhealthy, 100.0, 500.0)
//!     .try_build()
//!     .expect("well-formed standard");
//!
//! let reading = Reading::builder().pm25(35.4).build();
//! assert_eq!(reading.value_of(standard.name), Some(35.4));
//! ```

pub mod error;
pub mod parameter;
pub mod reading;
pub mod severity;
pub mod threshold;

pub use error::{ConfigError, ConfigResult};
pub use parameter::{ParameterName, ParameterStandard, ParameterStandardBuilder};
pub use reading::{Reading, ReadingBuilder};
pub use severity::Severity;
pub use threshold::Threshold;
