//! Warning classification of evaluated parameters.

use serde::{Deserialize, Serialize};

use crate::evaluate::EvaluatedParameter;

/// Evaluated parameters partitioned by acceptability.
///
/// Downstream collaborators (the notification service) decide whether a
/// non-empty `unacceptable` set warrants firing a notification and to
/// whom; this type carries no such policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classified {
    /// Parameters in good, moderate, or sensitive-unhealthy buckets.
    pub acceptable: Vec<EvaluatedParameter>,
    /// Parameters in unhealthy, very-unhealthy, or hazardous buckets.
    pub unacceptable: Vec<EvaluatedParameter>,
}

impl Classified {
    /// Whether any parameter resolved to an unacceptable bucket.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.unacceptable.is_empty()
    }

    /// Total number of parameters across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.acceptable.len() + self.unacceptable.len()
    }

    /// Whether both partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acceptable.is_empty() && self.unacceptable.is_empty()
    }
}

/// Partition evaluated parameters into acceptable and unacceptable sets.
///
/// Membership is strictly by resolved bucket: good, moderate, and
/// sensitive-unhealthy are acceptable; unhealthy, very-unhealthy, and
/// hazardous are not. Threshold resolution guarantees every evaluated
/// parameter carries one of those six buckets, so the two sets always
/// partition the input exactly — no overlap, no omission.
///
/// # Example
///
/// ```
/// use iaq_core::{classify, evaluate, ThresholdTable};
/// use iaq_types::{ParameterName, ParameterStandard, Reading, Severity};
///
/// let standards = vec![
///     ParameterStandard::builder(ParameterName::Pm25)
///         .unit("µg/m³")
///         .threshold(Severity::Good, 0.0, 50.0)
///         .threshold(Severity::Unhealthy, 50.0, 500.0)
///         .try_build()
///         .unwrap(),
/// ];
/// let reading = Reading::builder().pm25(80.0).build();
///
/// let classified = classify(evaluate(&reading, &standards, &ThresholdTable::new()));
/// assert!(classified.has_warnings());
/// assert_eq!(classified.unacceptable.len(), 1);
/// ```
#[must_use]
pub fn classify(evaluated: Vec<EvaluatedParameter>) -> Classified {
    let (acceptable, unacceptable) = evaluated
        .into_iter()
        .partition(|parameter| parameter.threshold.severity.is_acceptable());
    Classified {
        acceptable,
        unacceptable,
    }
}
