use thiserror::Error;

/// Errors that can occur while canonicalizing external data into [`Value`].
///
/// These represent the unsupported-input failure class: the comparator
/// itself never fails, so anything that cannot be represented as an
/// acyclic, finite value tree is rejected here, at the boundary.
///
/// [`Value`]: crate::Value
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    /// The provided JSON input was invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The provided YAML input was invalid.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Encountered a number that cannot be represented as an IEEE-754 f64.
    #[error("number {value} cannot be represented as f64")]
    NumberOutOfRange {
        /// The textual representation of the offending number.
        value: String,
    },
    /// YAML maps may only contain string keys.
    #[error("unsupported YAML key type: {found}")]
    NonStringYamlKey {
        /// A description of the key that triggered the error.
        found: String,
    },
    /// YAML tags carry semantics the value model cannot express.
    #[error("unsupported YAML tag: {tag}")]
    UnsupportedYamlTag {
        /// The tag identifier encountered in the document.
        tag: String,
    },
    /// Attempted to construct a [`Number`](crate::Number) that is not finite.
    #[error("non-finite number encountered: {value}")]
    NotFinite {
        /// The offending numeric value.
        value: f64,
    },
}

/// Errors emitted when constructing [`CompareOptions`](crate::CompareOptions).
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    /// Precision must be a finite, non-negative tolerance.
    #[error("precision must be a finite, non-negative number, got {value}")]
    InvalidPrecision {
        /// The rejected tolerance.
        value: f64,
    },
    /// Excluded keys must be non-empty strings.
    #[error("excluded keys must be non-empty strings")]
    EmptyExcludeKey,
}
