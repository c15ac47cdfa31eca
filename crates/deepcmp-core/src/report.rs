//! The assertion boundary on top of the comparator.
//!
//! A non-empty comparison becomes a single aggregated error bundling every
//! mismatch together with its rendered report, so one failure is enough to
//! locate every divergence.

use thiserror::Error;

use crate::{compare::compare_values, CompareOptions, ComparisonResult, ReportConfig, Value};

/// Aggregated failure raised when two values are not structurally equal.
///
/// Carries the raw [`ComparisonResult`] for machine consumption and renders
/// the full report through `Display`, so the caller's assertion layer can
/// propagate, log, or attach it as it sees fit.
#[derive(Debug, Error)]
#[error("{rendered}")]
pub struct MismatchError {
    result: ComparisonResult,
    rendered: String,
}

impl MismatchError {
    pub(crate) fn new(result: ComparisonResult) -> Self {
        let rendered = result.render(&ReportConfig::default());
        Self { result, rendered }
    }

    /// Returns the underlying comparison result.
    #[must_use]
    pub fn result(&self) -> &ComparisonResult {
        &self.result
    }

    /// Consumes the error and returns the comparison result.
    #[must_use]
    pub fn into_result(self) -> ComparisonResult {
        self.result
    }

    /// Returns the rendered multi-line report.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// Compares two values and fails when any mismatch is found.
///
/// The error bundles every mismatch, never just the first.
///
/// ```
/// # use deepcmp_core::{assert_equal, CompareOptions, Value};
/// let expected = Value::from_json_str("{\"a\":1}").unwrap();
/// let actual = Value::from_json_str("{\"a\":2}").unwrap();
/// let err = assert_equal(&expected, &actual, &CompareOptions::default()).unwrap_err();
/// assert_eq!(err.result().len(), 1);
/// assert!(err.to_string().contains("root.a"));
/// ```
pub fn assert_equal(
    expected: &Value,
    actual: &Value,
    options: &CompareOptions,
) -> Result<(), MismatchError> {
    let result = compare_values(expected, actual, options);
    if result.is_empty() {
        Ok(())
    } else {
        Err(MismatchError::new(result))
    }
}
