//! Overall index aggregation.

use serde::Serialize;

use crate::evaluate::EvaluatedParameter;
use crate::table::{CanonicalThreshold, ThresholdTable};

/// The overall air-quality index for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallIndexReport {
    /// Weighted-average IAQI across usable parameters.
    ///
    /// `None` when no parameter carried both a nonzero weight and a
    /// nonzero IAQI — explicit absence, never defaulted to `0.0`, since
    /// zero is a valid (best) air-quality score. Callers render this as
    /// "insufficient data".
    pub overall_iaqi: Option<f64>,
    /// Canonical bucket the overall index resolves to.
    ///
    /// `None` when there is no index, or when extrapolated parameter
    /// values pushed the average outside the 0–500 scale.
    pub bucket: Option<CanonicalThreshold>,
}

impl OverallIndexReport {
    /// Whether the report carries a usable index.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.overall_iaqi.is_some()
    }
}

/// Compute the overall IAQI as a weighted average of evaluated parameters.
///
/// Sums `iaqi * weight` over parameters where **both** the IAQI and the
/// weight are present and nonzero; zero-weight parameters never
/// contribute, and neither do parameters whose IAQI was dropped (or is
/// exactly zero, matching the engine's zero-as-absent convention).
///
/// The resulting index resolves to a bucket via the canonical table's
/// inclusive scan — note this differs from the half-open per-parameter
/// resolution on exact boundaries, by contract.
///
/// # Example
///
/// ```
/// use iaq_core::{aggregate, ThresholdTable};
/// # use iaq_core::{Classification, EvaluatedParameter};
/// # use iaq_types::{ParameterName, Severity, Threshold};
/// # fn param(iaqi: f64, weight: f64) -> EvaluatedParameter {
/// #     EvaluatedParameter {
/// #         name: ParameterName::Pm25,
/// #         unit: String::new(),
/// #         weight,
/// #         value: iaqi,
/// #         threshold: Threshold::new(Severity::Good, 0.0, 50.0),
/// #         iaqi: Some(iaqi),
/// #         classification: Classification::Normal,
/// #     }
/// # }
/// let report = aggregate(&[param(10.0, 1.0), param(30.0, 3.0)], &ThresholdTable::new());
/// assert_eq!(report.overall_iaqi, Some(25.0));
/// ```
#[must_use]
pub fn aggregate(
    evaluated: &[EvaluatedParameter],
    table: &ThresholdTable,
) -> OverallIndexReport {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for parameter in evaluated {
        let Some(iaqi) = parameter.iaqi else {
            continue;
        };
        if iaqi == 0.0 || parameter.weight == 0.0 {
            continue;
        }
        weighted_sum += iaqi * parameter.weight;
        total_weight += parameter.weight;
    }

    if total_weight == 0.0 {
        return OverallIndexReport {
            overall_iaqi: None,
            bucket: None,
        };
    }

    let overall = weighted_sum / total_weight;
    OverallIndexReport {
        overall_iaqi: Some(overall),
        bucket: table.resolve_overall(overall).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Classification;
    use iaq_types::{ParameterName, Severity, Threshold};

    fn param(iaqi: Option<f64>, weight: f64) -> EvaluatedParameter {
        EvaluatedParameter {
            name: ParameterName::Pm25,
            unit: "µg/m³".to_string(),
            weight,
            value: iaqi.unwrap_or(1.0),
            threshold: Threshold::new(Severity::Good, 0.0, 50.0),
            iaqi,
            classification: Classification::Normal,
        }
    }

    #[test]
    fn test_weighted_average() {
        let report = aggregate(
            &[param(Some(10.0), 1.0), param(Some(30.0), 3.0)],
            &ThresholdTable::new(),
        );
        // (10*1 + 30*3) / 4 = 25
        assert_eq!(report.overall_iaqi, Some(25.0));
        assert_eq!(report.bucket.unwrap().severity, Severity::Good);
    }

    #[test]
    fn test_zero_weight_excluded() {
        let report = aggregate(
            &[param(Some(400.0), 0.0), param(Some(20.0), 2.0)],
            &ThresholdTable::new(),
        );
        assert_eq!(report.overall_iaqi, Some(20.0));
    }

    #[test]
    fn test_missing_iaqi_excluded() {
        let report = aggregate(
            &[param(None, 5.0), param(Some(60.0), 1.0)],
            &ThresholdTable::new(),
        );
        assert_eq!(report.overall_iaqi, Some(60.0));
        assert_eq!(report.bucket.unwrap().severity, Severity::Moderate);
    }

    #[test]
    fn test_empty_input_reports_absence() {
        let report = aggregate(&[], &ThresholdTable::new());
        assert_eq!(report.overall_iaqi, None);
        assert_eq!(report.bucket, None);
        assert!(!report.has_data());
    }

    #[test]
    fn test_only_zero_weight_reports_absence() {
        let report = aggregate(&[param(Some(5.0), 0.0)], &ThresholdTable::new());
        assert_eq!(report.overall_iaqi, None);
        assert_eq!(report.bucket, None);
    }

    #[test]
    fn test_zero_iaqi_excluded() {
        // iaqi == 0.0 counts as absent for aggregation.
        let report = aggregate(&[param(Some(0.0), 2.0)], &ThresholdTable::new());
        assert_eq!(report.overall_iaqi, None);
    }

    #[test]
    fn test_off_scale_overall_has_no_bucket() {
        let report = aggregate(&[param(Some(650.0), 1.0)], &ThresholdTable::new());
        assert_eq!(report.overall_iaqi, Some(650.0));
        assert_eq!(report.bucket, None);
    }

    #[test]
    fn test_overall_bucket_inclusive_boundary() {
        let report = aggregate(&[param(Some(50.0), 1.0)], &ThresholdTable::new());
        // 50.0 resolves to Good under the inclusive canonical scan.
        assert_eq!(report.bucket.unwrap().severity, Severity::Good);
    }
}
