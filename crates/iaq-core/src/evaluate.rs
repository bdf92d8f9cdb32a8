//! Per-reading parameter evaluation.
//!
//! [`evaluate`] is the engine's entry point for one device reading: it
//! resolves each configured parameter against its own thresholds, remaps
//! the raw value onto the canonical IAQI scale, and classifies the result.
//! The output feeds [`aggregate`](crate::aggregate) for dashboard
//! reporting and [`classify`](crate::classify) for notification
//! triggering.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use iaq_types::{ParameterName, ParameterStandard, Reading, Threshold};

use crate::remap::remap;
use crate::resolve::resolve_threshold;
use crate::table::ThresholdTable;

/// Whether an evaluated parameter sits in an acceptable bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Resolved to good, moderate, or sensitive-unhealthy.
    Normal,
    /// Resolved to unhealthy, very-unhealthy, or hazardous.
    Warning,
}

/// One parameter's evaluation result.
///
/// Produced fresh on every [`evaluate`] call, never mutated afterwards,
/// and consumed immediately by the aggregator and classifier; this struct
/// is not a storage entity (collaborators persist notifications that copy
/// its displayable fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedParameter {
    /// Which parameter was evaluated.
    pub name: ParameterName,
    /// Native measurement unit, copied from the standard.
    pub unit: String,
    /// Aggregation weight, copied from the standard.
    pub weight: f64,
    /// The raw reading value, native unit.
    pub value: f64,
    /// The native-unit threshold the value resolved to.
    pub threshold: Threshold,
    /// The value remapped onto the canonical 0–500 scale.
    ///
    /// `None` when the native range was degenerate and no projection
    /// exists. For zero-weight parameters this instead carries the raw
    /// value unchanged (reported, but not comparable on the IAQI scale).
    pub iaqi: Option<f64>,
    /// Normal/warning classification of the resolved bucket.
    pub classification: Classification,
}

/// Evaluate one reading against a device's parameter standards.
///
/// For each standard, in input order:
///
/// - The typed reading field for the standard's parameter is looked up.
///   An absent value skips the parameter. **A reported `0.0` is treated
///   the same as absent** — zero is indistinguishable from "no reading"
///   in the upstream payloads, so a true zero reading (0% humidity,
///   0 ppm CO) is unrepresentable. This is preserved, documented
///   behavior, not something to patch here. `NaN` is skipped the same
///   way: it resolves to no meaningful bucket and must never reach a
///   report.
/// - The value is resolved against the standard's own thresholds
///   ([`resolve_threshold`]) and classified by the resolved bucket.
/// - Zero-weight parameters skip remapping and carry their raw value as
///   `iaqi` (informational passthrough).
/// - Otherwise the value is remapped from the resolved native bucket onto
///   the canonical bucket of the same severity. A degenerate native range
///   drops only that parameter's IAQI; the raw value, threshold, and
///   classification are still reported and evaluation continues.
///
/// A standard with an empty threshold list violates the construction
/// precondition (see
/// [`ParameterStandard::validate`](iaq_types::ParameterStandard::validate));
/// it is skipped with a logged warning.
///
/// Each standard produces at most one [`EvaluatedParameter`], and output
/// order follows input order.
///
/// # Example
///
/// ```
/// use iaq_core::{evaluate, Classification, ThresholdTable};
/// use iaq_types::{ParameterName, ParameterStandard, Reading, Severity};
///
/// let standards = vec![
///     ParameterStandard::builder(ParameterName::Pm25)
///         .unit("µg/m³")
///         .threshold(Severity::Good, 0.0, 50.0)
///         .threshold(Severity::Moderate, 50.0, 100.0)
///         .threshold(Severity::Unhealthy, 100.0, 500.0)
///         .try_build()
///         .unwrap(),
/// ];
/// let reading = Reading::builder().pm25(120.0).build();
///
/// let evaluated = evaluate(&reading, &standards, &ThresholdTable::new());
/// assert_eq!(evaluated.len(), 1);
/// assert_eq!(evaluated[0].iaqi, Some(152.5));
/// assert_eq!(evaluated[0].classification, Classification::Warning);
/// ```
#[must_use]
pub fn evaluate(
    reading: &Reading,
    standards: &[ParameterStandard],
    table: &ThresholdTable,
) -> Vec<EvaluatedParameter> {
    let mut evaluated = Vec::with_capacity(standards.len());

    for standard in standards {
        let Some(value) = reading.value_of(standard.name) else {
            continue;
        };
        // Zero readings are indistinguishable from "no reading" upstream,
        // and NaN has no bucket or projection.
        if value == 0.0 || value.is_nan() {
            continue;
        }

        let Some(threshold) = resolve_threshold(value, &standard.thresholds) else {
            warn!(
                parameter = %standard.name,
                "skipping parameter with empty threshold list"
            );
            continue;
        };

        let classification = if threshold.severity.is_acceptable() {
            Classification::Normal
        } else {
            Classification::Warning
        };

        let iaqi = if standard.weight == 0.0 {
            // Not normalizable onto the IAQI scale; report the raw value.
            Some(value)
        } else {
            let canonical = table.canonical(threshold.severity);
            match remap(value, threshold.min, threshold.max, canonical.min, canonical.max) {
                Ok(iaqi) => Some(iaqi),
                Err(err) => {
                    warn!(
                        parameter = %standard.name,
                        %err,
                        "dropping IAQI contribution for parameter"
                    );
                    None
                }
            }
        };

        debug!(
            parameter = %standard.name,
            value,
            severity = %threshold.severity,
            ?iaqi,
            "evaluated parameter"
        );

        evaluated.push(EvaluatedParameter {
            name: standard.name,
            unit: standard.unit.clone(),
            weight: standard.weight,
            value,
            threshold: threshold.clone(),
            iaqi,
            classification,
        });
    }

    evaluated
}
