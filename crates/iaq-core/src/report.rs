//! Combined quality reports.

use serde::Serialize;

use iaq_types::{ParameterStandard, Reading};

use crate::aggregate::{OverallIndexReport, aggregate};
use crate::evaluate::{EvaluatedParameter, evaluate};
use crate::table::ThresholdTable;

/// A full quality report for one reading: every evaluated parameter plus
/// the overall index.
///
/// This is what the reporting path returns per averaged time bucket; the
/// ingestion path instead feeds [`evaluate`] output into
/// [`classify`](crate::classify) to decide on notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    /// Per-parameter evaluation results, in standard order.
    pub parameters: Vec<EvaluatedParameter>,
    /// Weighted overall index and its canonical bucket.
    pub overall: OverallIndexReport,
}

impl QualityReport {
    /// Evaluate a reading and aggregate the overall index in one call.
    ///
    /// # Example
    ///
    /// ```
    /// use iaq_core::{QualityReport, ThresholdTable};
    /// use iaq_types::{ParameterName, ParameterStandard, Reading, Severity};
    ///
    /// let standards = vec![
    ///     ParameterStandard::builder(ParameterName::Co2)
    ///         .unit("ppm")
    ///         .threshold(Severity::Good, 0.0, 800.0)
    ///         .threshold(Severity::Moderate, 800.0, 1200.0)
    ///         .try_build()
    ///         .unwrap(),
    /// ];
    /// let reading = Reading::builder().co2(600.0).build();
    ///
    /// let report = QualityReport::compute(&reading, &standards, &ThresholdTable::new());
    /// assert!(report.overall.has_data());
    /// ```
    #[must_use]
    pub fn compute(
        reading: &Reading,
        standards: &[ParameterStandard],
        table: &ThresholdTable,
    ) -> Self {
        let parameters = evaluate(reading, standards, table);
        let overall = aggregate(&parameters, table);
        Self {
            parameters,
            overall,
        }
    }
}
