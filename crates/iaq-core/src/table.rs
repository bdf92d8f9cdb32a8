//! Canonical IAQI threshold table.
//!
//! The canonical scale runs 0–500 and is shared by every parameter: the
//! remapper projects native-unit values onto it, and the aggregator
//! resolves the overall index against it. The table is read-only
//! reference data loaded once; it is passed by reference into the engine
//! rather than accessed as a global, which keeps evaluation pure and
//! tests free to inject it.

use serde::Serialize;

use iaq_types::Severity;

/// One bucket of the canonical 0–500 IAQI scale.
///
/// Unlike a native [`Threshold`](iaq_types::Threshold), canonical buckets
/// are fixed and shared across all parameters, so their metadata is
/// borrowed from static storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalThreshold {
    /// Severity bucket.
    pub severity: Severity,
    /// Human-readable display label.
    pub label: &'static str,
    /// Display color, hex RGB.
    pub color: &'static str,
    /// Lower bound on the IAQI scale.
    pub min: f64,
    /// Upper bound on the IAQI scale.
    pub max: f64,
}

const fn canonical(severity: Severity, label: &'static str, color: &'static str, min: f64, max: f64) -> CanonicalThreshold {
    CanonicalThreshold {
        severity,
        label,
        color,
        min,
        max,
    }
}

// Stored in Severity::ALL order so severity lookups can index directly.
const CANONICAL_THRESHOLDS: [CanonicalThreshold; 6] = [
    canonical(Severity::Good, "Good", "#00e400", 0.0, 50.0),
    canonical(Severity::Moderate, "Moderate", "#ffff00", 50.0, 100.0),
    canonical(
        Severity::SensitiveUnhealthy,
        "Unhealthy for Sensitive Groups",
        "#ff7e00",
        100.0,
        150.0,
    ),
    canonical(Severity::Unhealthy, "Unhealthy", "#ff0000", 150.0, 200.0),
    canonical(Severity::VeryUnhealthy, "Very Unhealthy", "#8f3f97", 200.0, 300.0),
    canonical(Severity::Hazardous, "Hazardous", "#7e0023", 300.0, 500.0),
];

/// The canonical IAQI threshold table.
///
/// # Example
///
/// ```
/// use iaq_core::ThresholdTable;
/// use iaq_types::Severity;
///
/// let table = ThresholdTable::new();
/// let unhealthy = table.canonical(Severity::Unhealthy);
/// assert_eq!((unhealthy.min, unhealthy.max), (150.0, 200.0));
///
/// let bucket = table.resolve_overall(152.5).unwrap();
/// assert_eq!(bucket.severity, Severity::Unhealthy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    entries: [CanonicalThreshold; 6],
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdTable {
    /// The fixed canonical table (0–50, 50–100, 100–150, 150–200,
    /// 200–300, 300–500).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: CANONICAL_THRESHOLDS,
        }
    }

    /// All six buckets, ascending by severity.
    #[must_use]
    pub fn entries(&self) -> &[CanonicalThreshold] {
        &self.entries
    }

    /// The canonical bucket for a severity level.
    ///
    /// Every severity has exactly one canonical bucket, so this lookup is
    /// total.
    #[must_use]
    pub fn canonical(&self, severity: Severity) -> &CanonicalThreshold {
        &self.entries[severity as usize]
    }

    /// Resolve an overall IAQI value to its canonical bucket.
    ///
    /// Scans for the first bucket where `min <= value <= max`. Both ends
    /// are inclusive here, unlike per-parameter resolution which is
    /// half-open; the asymmetry is part of the contract and must not be
    /// unified, since doing so would shift exact-boundary values into a
    /// different severity class.
    ///
    /// Returns `None` for values outside 0–500, which can happen when
    /// extrapolated parameter IAQIs pull the weighted average off-scale.
    #[must_use]
    pub fn resolve_overall(&self, value: f64) -> Option<&CanonicalThreshold> {
        self.entries
            .iter()
            .find(|entry| entry.min <= value && value <= entry.max)
    }
}
