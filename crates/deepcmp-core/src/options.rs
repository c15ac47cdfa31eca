use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{compare::PathSegment, OptionsError};

/// Configuration knobs passed to equality and comparison operations.
///
/// Options are constructed once and are immutable afterwards; a single
/// instance may be shared across threads because every comparison call
/// only reads it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompareOptions {
    exclude_keys: BTreeSet<String>,
    precision: f64,
}

impl CompareOptions {
    /// Returns the configured exclusion set.
    ///
    /// ```
    /// # use deepcmp_core::CompareOptions;
    /// let opts = CompareOptions::default()
    ///     .with_exclude_keys(["timestamp"])
    ///     .expect("exclusions");
    /// assert!(opts.exclude_keys().contains("timestamp"));
    /// ```
    #[must_use]
    pub fn exclude_keys(&self) -> &BTreeSet<String> {
        &self.exclude_keys
    }

    /// Returns the numeric equality tolerance.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Sets the key names skipped entirely during comparison.
    ///
    /// Matching is by exact key name, independent of nesting depth. There
    /// is no glob or partial matching.
    ///
    /// ```
    /// # use deepcmp_core::CompareOptions;
    /// let opts = CompareOptions::default()
    ///     .with_exclude_keys(["timestamp", "request_id"])
    ///     .expect("exclusions");
    /// assert_eq!(opts.exclude_keys().len(), 2);
    /// ```
    pub fn with_exclude_keys<I, S>(mut self, keys: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected = BTreeSet::new();
        for key in keys {
            let key = key.into();
            if key.trim().is_empty() {
                return Err(OptionsError::EmptyExcludeKey);
            }
            collected.insert(key);
        }
        self.exclude_keys = collected;
        Ok(self)
    }

    /// Sets the absolute tolerance for numeric scalar equality.
    ///
    /// The default of `0.0` demands exact equality.
    ///
    /// ```
    /// # use deepcmp_core::CompareOptions;
    /// let opts = CompareOptions::default().with_precision(0.5).expect("precision");
    /// assert!((opts.precision() - 0.5).abs() < f64::EPSILON);
    /// ```
    pub fn with_precision(mut self, precision: f64) -> Result<Self, OptionsError> {
        if !precision.is_finite() || precision < 0.0 {
            return Err(OptionsError::InvalidPrecision { value: precision });
        }
        self.precision = precision;
        Ok(self)
    }

    /// Indicates whether a path segment is excluded from comparison.
    ///
    /// Only key segments can match; sequence indices are never excluded.
    ///
    /// ```
    /// # use deepcmp_core::{CompareOptions, PathSegment};
    /// let opts = CompareOptions::default().with_exclude_keys(["ts"]).expect("exclusions");
    /// assert!(opts.excludes(&PathSegment::key("ts")));
    /// assert!(!opts.excludes(&PathSegment::index(0)));
    /// ```
    #[must_use]
    pub fn excludes(&self, segment: &PathSegment) -> bool {
        match segment {
            PathSegment::Key(name) => self.excludes_key(name),
            PathSegment::Index(_) => false,
        }
    }

    pub(crate) fn excludes_key(&self, key: &str) -> bool {
        self.exclude_keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_keys_require_non_empty_strings() {
        let err = CompareOptions::default().with_exclude_keys([" "]).unwrap_err();
        assert_eq!(err, OptionsError::EmptyExcludeKey);
    }

    #[test]
    fn negative_precision_is_rejected() {
        let err = CompareOptions::default().with_precision(-0.1).unwrap_err();
        assert_eq!(err, OptionsError::InvalidPrecision { value: -0.1 });
    }

    #[test]
    fn nan_precision_is_rejected() {
        assert!(CompareOptions::default().with_precision(f64::NAN).is_err());
    }

    #[test]
    fn exclusion_matches_keys_only() {
        let opts = CompareOptions::default().with_exclude_keys(["ts"]).unwrap();
        assert!(opts.excludes(&PathSegment::key("ts")));
        assert!(!opts.excludes(&PathSegment::key("other")));
        assert!(!opts.excludes(&PathSegment::index(3)));
    }
}
