//! Structural difference engine for nested, heterogeneously typed values.
//!
//! `deepcmp-core` walks two values (mappings, ordered sequences, scalars)
//! in lock-step and produces a complete, path-addressed list of every point
//! of divergence instead of failing fast on the first. Keys can be excluded
//! by name at any depth, numeric equality tolerates a configurable absolute
//! precision, and a non-empty result can be turned into one aggregated
//! assertion failure carrying the full report.
//!
//! ```
//! use deepcmp_core::{assert_equal, CompareOptions, Value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let expected = Value::from_json_str("{\"id\":1,\"ts\":\"2020-01-01\"}")?;
//!     let actual = Value::from_json_str("{\"id\":1,\"ts\":\"2024-06-01\"}")?;
//!
//!     let strict = expected.compare(&actual, &CompareOptions::default());
//!     assert_eq!(strict.len(), 1);
//!
//!     let options = CompareOptions::default().with_exclude_keys(["ts"])?;
//!     assert_equal(&expected, &actual, &options)?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compare;
mod error;
mod number;
mod options;
mod report;
mod value;

pub use compare::{
    compare_values, ComparisonResult, Mismatch, MismatchKind, Path, PathSegment, ReportConfig,
};
pub use error::{CanonicalizeError, OptionsError};
pub use number::Number;
pub use options::CompareOptions;
pub use report::{assert_equal, MismatchError};
pub use value::{Value, ValueKind};

/// Returns the semantic version of the `deepcmp-core` crate.
///
/// ```
/// assert!(!deepcmp_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
