use thiserror::Error;

/// Errors produced by the diversity metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A metric denominator was zero: either the species-count map is empty
    /// (no observations to take proportions of) or the normalization constant
    /// (log of richness) vanished for a single-species map.
    ///
    /// This signals a data-quality condition (an empty or singleton
    /// category) rather than a programming defect.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}

/// A report failed because one of its categories could not produce metrics.
///
/// Report generation aborts on the first failing category; no partial output
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("category '{category}': {source}")]
pub struct ReportError {
    /// The category whose species counts triggered the failure.
    pub category: String,
    #[source]
    pub source: MetricError,
}
