//! Per-parameter threshold resolution.

use iaq_types::Threshold;

/// Find the threshold bucket a raw value falls into.
///
/// This is a plain forward scan over the authored list, matching on the
/// half-open range `min <= value < max`. Two behaviors are part of the
/// contract and deliberately not "improved":
///
/// - **Last match wins.** Threshold lists are authored non-overlapping,
///   but overlap is not rejected at evaluation time; when it occurs, the
///   later entry takes precedence. A forward scan with overwrite (not a
///   binary search or sorted-interval structure) guarantees identical
///   results on malformed configurations.
/// - **Fallback to the last element.** A value outside every range
///   resolves to the final entry, the highest-severity bucket by authoring
///   convention. Out-of-range-low values (including negative calibration
///   noise) take the same fallback as out-of-range-high values; that
///   asymmetry is known and preserved.
///
/// Returns `None` only for an empty slice, which violates the documented
/// precondition that standards carry at least one threshold
/// (see [`ParameterStandard::validate`](iaq_types::ParameterStandard::validate)).
///
/// # Examples
///
/// ```
/// use iaq_core::resolve_threshold;
/// use iaq_types::{Severity, Threshold};
///
/// let thresholds = vec![
///     Threshold::new(Severity::Good, 0.0, 50.0),
///     Threshold::new(Severity::Moderate, 50.0, 100.0),
///     Threshold::new(Severity::Unhealthy, 100.0, 500.0),
/// ];
///
/// assert_eq!(resolve_threshold(120.0, &thresholds).unwrap().severity, Severity::Unhealthy);
/// // Out of range high falls back to the last bucket.
/// assert_eq!(resolve_threshold(9000.0, &thresholds).unwrap().severity, Severity::Unhealthy);
/// ```
#[must_use]
pub fn resolve_threshold(value: f64, thresholds: &[Threshold]) -> Option<&Threshold> {
    let mut resolved = thresholds.last()?;
    for threshold in thresholds {
        if threshold.contains(value) {
            resolved = threshold;
        }
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iaq_types::Severity;

    fn pm25_thresholds() -> Vec<Threshold> {
        vec![
            Threshold::new(Severity::Good, 0.0, 50.0),
            Threshold::new(Severity::Moderate, 50.0, 100.0),
            Threshold::new(Severity::Unhealthy, 100.0, 500.0),
        ]
    }

    #[test]
    fn test_resolves_matching_bucket() {
        let thresholds = pm25_thresholds();
        assert_eq!(
            resolve_threshold(10.0, &thresholds).unwrap().severity,
            Severity::Good
        );
        assert_eq!(
            resolve_threshold(75.0, &thresholds).unwrap().severity,
            Severity::Moderate
        );
        assert_eq!(
            resolve_threshold(120.0, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
    }

    #[test]
    fn test_half_open_boundaries() {
        let thresholds = pm25_thresholds();
        // Lower bound belongs to the bucket, upper bound to the next one.
        assert_eq!(
            resolve_threshold(50.0, &thresholds).unwrap().severity,
            Severity::Moderate
        );
        assert_eq!(
            resolve_threshold(100.0, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
    }

    #[test]
    fn test_fallback_out_of_range_high() {
        let thresholds = pm25_thresholds();
        assert_eq!(
            resolve_threshold(500.0, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
        assert_eq!(
            resolve_threshold(1e9, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
    }

    #[test]
    fn test_fallback_out_of_range_low() {
        // Negative readings (calibration noise) take the same last-element
        // fallback as out-of-range-high values.
        let thresholds = pm25_thresholds();
        assert_eq!(
            resolve_threshold(-3.0, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let thresholds = vec![
            Threshold::new(Severity::Good, 0.0, 100.0),
            Threshold::new(Severity::Moderate, 50.0, 150.0),
        ];
        // 75 falls in both ranges; the later entry takes precedence.
        assert_eq!(
            resolve_threshold(75.0, &thresholds).unwrap().severity,
            Severity::Moderate
        );
        // 25 only falls in the first.
        assert_eq!(
            resolve_threshold(25.0, &thresholds).unwrap().severity,
            Severity::Good
        );
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(resolve_threshold(10.0, &[]), None);
    }

    #[test]
    fn test_single_bucket_list() {
        let thresholds = vec![Threshold::new(Severity::Good, 0.0, 50.0)];
        assert_eq!(
            resolve_threshold(999.0, &thresholds).unwrap().severity,
            Severity::Good
        );
    }

    #[test]
    fn test_unordered_list_still_matches() {
        // The scan does not assume ascending ranges.
        let thresholds = vec![
            Threshold::new(Severity::Unhealthy, 100.0, 500.0),
            Threshold::new(Severity::Good, 0.0, 50.0),
            Threshold::new(Severity::Moderate, 50.0, 100.0),
        ];
        assert_eq!(
            resolve_threshold(120.0, &thresholds).unwrap().severity,
            Severity::Unhealthy
        );
    }
}
