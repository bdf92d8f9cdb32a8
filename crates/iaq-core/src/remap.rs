//! Linear range remapping onto the canonical IAQI scale.

use crate::error::{Error, Result};

/// Project a value from its native range onto a canonical range.
///
/// Computes the fractional position of `value` within
/// `[native_min, native_max)` and projects it linearly onto
/// `[canonical_min, canonical_max]`:
///
/// ```text
/// canonical_min + (value - native_min) / (native_max - native_min)
///               * (canonical_max - canonical_min)
/// ```
///
/// No clamping is applied: a value outside the native range produces an
/// extrapolated, possibly out-of-canonical-bounds result. That is
/// intentional — threshold resolution already constrains typical inputs,
/// and an off-scale result signals an unusually extreme reading instead
/// of being silently clipped.
///
/// # Errors
///
/// Returns [`Error::DegenerateRange`] when `native_min == native_max`,
/// which would otherwise divide by zero. Callers handle this
/// per-parameter and keep evaluating the rest.
///
/// # Examples
///
/// ```
/// use iaq_core::remap;
///
/// // PM2.5 reading of 120 in the native unhealthy bucket [100, 500)
/// // projected onto the canonical unhealthy bucket [150, 200].
/// let iaqi = remap(120.0, 100.0, 500.0, 150.0, 200.0).unwrap();
/// assert_eq!(iaqi, 152.5);
///
/// assert!(remap(5.0, 5.0, 5.0, 0.0, 100.0).is_err());
/// ```
pub fn remap(
    value: f64,
    native_min: f64,
    native_max: f64,
    canonical_min: f64,
    canonical_max: f64,
) -> Result<f64> {
    if native_min == native_max {
        return Err(Error::DegenerateRange {
            min: native_min,
            max: native_max,
        });
    }
    let fraction = (value - native_min) / (native_max - native_min);
    Ok(canonical_min + fraction * (canonical_max - canonical_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(remap(100.0, 100.0, 500.0, 150.0, 200.0).unwrap(), 150.0);
        assert_eq!(remap(500.0, 100.0, 500.0, 150.0, 200.0).unwrap(), 200.0);
    }

    #[test]
    fn test_spec_scenario() {
        // 150 + ((120 - 100) / 400) * 50 = 152.5
        assert_eq!(remap(120.0, 100.0, 500.0, 150.0, 200.0).unwrap(), 152.5);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(remap(50.0, 0.0, 100.0, 0.0, 500.0).unwrap(), 250.0);
    }

    #[test]
    fn test_extrapolation_not_clamped() {
        // Above the native range projects past the canonical maximum.
        let high = remap(900.0, 100.0, 500.0, 150.0, 200.0).unwrap();
        assert_eq!(high, 250.0);
        // Below the native range projects under the canonical minimum.
        let low = remap(0.0, 100.0, 500.0, 150.0, 200.0).unwrap();
        assert_eq!(low, 137.5);
    }

    #[test]
    fn test_degenerate_range() {
        let err = remap(5.0, 5.0, 5.0, 0.0, 100.0).unwrap_err();
        assert_eq!(err, Error::DegenerateRange { min: 5.0, max: 5.0 });
    }

    #[test]
    fn test_negative_native_range() {
        // e.g. temperature bucket spanning negative values.
        assert_eq!(remap(-20.0, -40.0, 0.0, 0.0, 50.0).unwrap(), 25.0);
    }

    #[test]
    fn test_result_is_finite_for_finite_inputs() {
        let v = remap(123.456, 0.0, 1000.0, 0.0, 500.0).unwrap();
        assert!(v.is_finite());
    }
}
