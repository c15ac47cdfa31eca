//! Mismatch data structures and the comparison algorithm.
//!
//! The module defines the closed mismatch taxonomy, the path-addressed
//! mismatch record, and the work-list traversal that walks two values in
//! lock-step and records every point of divergence instead of stopping at
//! the first.

mod engine;
mod mapping;
mod path;
mod scalar;
mod sequence;

pub use path::{path_from_segments, Path, PathSegment};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CompareOptions, Value};

/// The closed set of divergence kinds the engine can record.
///
/// ```
/// # use deepcmp_core::MismatchKind;
/// assert_eq!(MismatchKind::TypeMismatch.to_string(), "type_mismatch");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// The two sides have different runtime categories.
    TypeMismatch,
    /// Same-kind scalars with different values.
    ValueMismatch,
    /// A mapping key present in the expected value only.
    MissingInActual,
    /// A mapping key present in the actual value only.
    MissingInExpected,
    /// Sequences of different lengths.
    LengthMismatch,
    /// Position-sensitive scalar divergence inside a sequence.
    SequenceItemMismatch,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => f.write_str("type_mismatch"),
            Self::ValueMismatch => f.write_str("value_mismatch"),
            Self::MissingInActual => f.write_str("missing_in_actual"),
            Self::MissingInExpected => f.write_str("missing_in_expected"),
            Self::LengthMismatch => f.write_str("length_mismatch"),
            Self::SequenceItemMismatch => f.write_str("sequence_item_mismatch"),
        }
    }
}

/// One recorded point of structural divergence between expected and actual.
///
/// The kind fixes which sides are populated: [`MismatchKind::MissingInActual`]
/// carries only `expected`, [`MismatchKind::MissingInExpected`] carries only
/// `actual`, every other kind carries both.
///
/// ```
/// # use deepcmp_core::{Mismatch, Path, PathSegment, Value};
/// let path = Path::from(PathSegment::key("age"));
/// let mismatch = Mismatch::value_mismatch(
///     path,
///     Value::from_json_str("30").unwrap(),
///     Value::from_json_str("31").unwrap(),
/// );
/// assert!(mismatch.expected.is_some());
/// assert!(mismatch.actual.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Location of the divergence, rooted at the comparison root.
    #[serde(default)]
    pub path: Path,
    /// Which kind of divergence was observed.
    pub kind: MismatchKind,
    /// The expected-side value, when the kind captures one.
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    /// The actual-side value, when the kind captures one.
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

// A present field always captures a value, even JSON null; absence alone
// means the side was not populated.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Mismatch {
    /// Records a runtime-category clash; both values are captured.
    #[must_use]
    pub fn type_mismatch(path: Path, expected: Value, actual: Value) -> Self {
        Self { path, kind: MismatchKind::TypeMismatch, expected: Some(expected), actual: Some(actual) }
    }

    /// Records a scalar value divergence outside a sequence position.
    #[must_use]
    pub fn value_mismatch(path: Path, expected: Value, actual: Value) -> Self {
        Self { path, kind: MismatchKind::ValueMismatch, expected: Some(expected), actual: Some(actual) }
    }

    /// Records a scalar value divergence at a sequence position.
    #[must_use]
    pub fn sequence_item_mismatch(path: Path, expected: Value, actual: Value) -> Self {
        Self {
            path,
            kind: MismatchKind::SequenceItemMismatch,
            expected: Some(expected),
            actual: Some(actual),
        }
    }

    /// Records a sequence length divergence; both full sequences are captured.
    #[must_use]
    pub fn length_mismatch(path: Path, expected: Value, actual: Value) -> Self {
        Self { path, kind: MismatchKind::LengthMismatch, expected: Some(expected), actual: Some(actual) }
    }

    /// Records a key present in the expected value only.
    #[must_use]
    pub fn missing_in_actual(path: Path, expected: Value) -> Self {
        Self { path, kind: MismatchKind::MissingInActual, expected: Some(expected), actual: None }
    }

    /// Records a key present in the actual value only.
    #[must_use]
    pub fn missing_in_expected(path: Path, actual: Value) -> Self {
        Self { path, kind: MismatchKind::MissingInExpected, expected: None, actual: Some(actual) }
    }
}

/// Ordered collection of mismatches produced by one comparison call.
///
/// Insertion order is traversal order; an empty result means the two values
/// are structurally equal under the active options.
///
/// ```
/// # use deepcmp_core::{ComparisonResult, Mismatch, Path, Value};
/// let result = ComparisonResult::from_mismatches(vec![Mismatch::missing_in_actual(
///     Path::new(),
///     Value::Null,
/// )]);
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonResult {
    mismatches: Vec<Mismatch>,
}

/// Configuration toggles for report rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportConfig {
    color: bool,
}

impl ReportConfig {
    /// Constructs a configuration with default settings (no ANSI color).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI color output.
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Indicates whether color output is enabled.
    #[must_use]
    pub fn color_enabled(self) -> bool {
        self.color
    }
}

const COLOR_RESET: &str = "\u{1b}[0m";
const COLOR_RED: &str = "\u{1b}[31m";
const COLOR_GREEN: &str = "\u{1b}[32m";

impl ComparisonResult {
    /// Constructs an empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self { mismatches: Vec::new() }
    }

    /// Builds a result from the provided mismatches.
    #[must_use]
    pub fn from_mismatches(mismatches: Vec<Mismatch>) -> Self {
        Self { mismatches }
    }

    /// Returns the number of recorded mismatches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    /// Indicates whether the compared values were structurally equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Returns the recorded mismatches in traversal order.
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// Returns an iterator over the mismatches.
    pub fn iter(&self) -> std::slice::Iter<'_, Mismatch> {
        self.mismatches.iter()
    }

    /// Consumes the result and returns the mismatches.
    #[must_use]
    pub fn into_mismatches(self) -> Vec<Mismatch> {
        self.mismatches
    }

    /// Renders the multi-line human-readable report.
    ///
    /// The first line summarizes the total count; every following line shows
    /// one mismatch with its breadcrumb, kind, and captured values.
    ///
    /// ```
    /// # use deepcmp_core::{CompareOptions, ReportConfig, Value};
    /// let expected = Value::from_json_str("{\"a\":1}").unwrap();
    /// let actual = Value::from_json_str("{\"a\":2}").unwrap();
    /// let result = expected.compare(&actual, &CompareOptions::default());
    /// let report = result.render(&ReportConfig::default());
    /// assert_eq!(report, "found 1 mismatch\nroot.a [value_mismatch] expected: 1, actual: 2\n");
    /// ```
    #[must_use]
    pub fn render(&self, config: &ReportConfig) -> String {
        let mut output = String::new();
        let noun = if self.len() == 1 { "mismatch" } else { "mismatches" };
        output.push_str(&format!("found {} {noun}\n", self.len()));

        for mismatch in &self.mismatches {
            output.push_str(&mismatch.path.to_string());
            output.push_str(" [");
            output.push_str(&mismatch.kind.to_string());
            output.push(']');
            if let Some(expected) = &mismatch.expected {
                output.push_str(" expected: ");
                push_side(&mut output, mismatch.kind, expected, COLOR_RED, config);
            }
            if let Some(actual) = &mismatch.actual {
                if mismatch.expected.is_some() {
                    output.push(',');
                }
                output.push_str(" actual: ");
                push_side(&mut output, mismatch.kind, actual, COLOR_GREEN, config);
            }
            output.push('\n');
        }
        output
    }
}

fn push_side(
    output: &mut String,
    kind: MismatchKind,
    value: &Value,
    color: &str,
    config: &ReportConfig,
) {
    if config.color_enabled() {
        output.push_str(color);
    }
    if let (MismatchKind::LengthMismatch, Value::Sequence(items)) = (kind, value) {
        let noun = if items.len() == 1 { "item" } else { "items" };
        output.push_str(&format!("{} {noun} ", items.len()));
    }
    output.push_str(&value_to_json(value));
    if config.color_enabled() {
        output.push_str(COLOR_RESET);
    }
}

fn value_to_json(value: &Value) -> String {
    serde_json::to_string(&value.to_json_value()).expect("serializing value")
}

impl IntoIterator for ComparisonResult {
    type Item = Mismatch;
    type IntoIter = std::vec::IntoIter<Mismatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.mismatches.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComparisonResult {
    type Item = &'a Mismatch;
    type IntoIter = std::slice::Iter<'a, Mismatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.mismatches.iter()
    }
}

impl From<Vec<Mismatch>> for ComparisonResult {
    fn from(value: Vec<Mismatch>) -> Self {
        Self::from_mismatches(value)
    }
}

/// Computes the full structural comparison between two values.
///
/// The traversal never short-circuits: every point of divergence reachable
/// under the exclusion rules is recorded, in deterministic traversal order.
///
/// ```
/// # use deepcmp_core::{compare::compare_values, CompareOptions, Value};
/// let expected = Value::from_json_str("{\"a\":1,\"b\":{\"c\":2}}").unwrap();
/// let actual = Value::from_json_str("{\"a\":1,\"b\":{\"c\":3}}").unwrap();
/// let result = compare_values(&expected, &actual, &CompareOptions::default());
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.mismatches()[0].path.to_string(), "root.b.c");
/// ```
#[must_use]
pub fn compare_values(
    expected: &Value,
    actual: &Value,
    options: &CompareOptions,
) -> ComparisonResult {
    engine::compare_values(expected, actual, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Value {
        Value::from_json_str(input).unwrap()
    }

    #[test]
    fn identical_values_produce_empty_result() {
        let value = parse("{\"a\":[1,{\"b\":null}]}");
        let result = compare_values(&value, &value, &CompareOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn nested_value_mismatch_is_path_addressed() {
        let expected = parse("{\"a\":1,\"b\":{\"c\":2}}");
        let actual = parse("{\"a\":1,\"b\":{\"c\":3}}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let want = ComparisonResult::from_mismatches(vec![Mismatch::value_mismatch(
            path_from_segments([PathSegment::key("b"), PathSegment::key("c")]),
            parse("2"),
            parse("3"),
        )]);
        assert_eq!(result, want);
    }

    #[test]
    fn extra_key_reports_missing_in_expected() {
        let expected = parse("{\"a\":1}");
        let actual = parse("{\"a\":1,\"b\":2}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let want = ComparisonResult::from_mismatches(vec![Mismatch::missing_in_expected(
            Path::from(PathSegment::key("b")),
            parse("2"),
        )]);
        assert_eq!(result, want);
    }

    #[test]
    fn absent_key_reports_missing_in_actual() {
        let expected = parse("{\"name\":\"alice\",\"email\":\"a@example.com\"}");
        let actual = parse("{\"name\":\"alice\"}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result.mismatches()[0].kind, MismatchKind::MissingInActual);
        assert_eq!(result.mismatches()[0].path.to_string(), "root.email");
        assert!(result.mismatches()[0].actual.is_none());
    }

    #[test]
    fn scalar_category_clash_reports_type_mismatch() {
        let expected = parse("{\"a\":1}");
        let actual = parse("{\"a\":\"1\"}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let want = ComparisonResult::from_mismatches(vec![Mismatch::type_mismatch(
            Path::from(PathSegment::key("a")),
            parse("1"),
            parse("\"1\""),
        )]);
        assert_eq!(result, want);
    }

    #[test]
    fn container_category_clash_does_not_cascade() {
        let expected = parse("{\"a\":{\"b\":1,\"c\":2}}");
        let actual = parse("{\"a\":[1,2]}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result.mismatches()[0].kind, MismatchKind::TypeMismatch);
        assert_eq!(result.mismatches()[0].path.to_string(), "root.a");
    }

    #[test]
    fn shorter_sequence_reports_length_only_when_overlap_matches() {
        let expected = parse("[1,2,3]");
        let actual = parse("[1,2]");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let want = ComparisonResult::from_mismatches(vec![Mismatch::length_mismatch(
            Path::new(),
            parse("[1,2,3]"),
            parse("[1,2]"),
        )]);
        assert_eq!(result, want);
    }

    #[test]
    fn permuted_sequence_reports_each_position() {
        let expected = parse("[1,2,3]");
        let actual = parse("[3,2,1]");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        assert_eq!(result.len(), 2);
        for (mismatch, index) in result.iter().zip([0usize, 2usize]) {
            assert_eq!(mismatch.kind, MismatchKind::SequenceItemMismatch);
            assert_eq!(mismatch.path, Path::from(PathSegment::index(index)));
        }
    }

    #[test]
    fn excluded_keys_contribute_nothing_at_any_depth() {
        let expected = parse("{\"id\":1,\"ts\":\"2020-01-01\",\"inner\":{\"ts\":\"x\"}}");
        let actual = parse("{\"id\":1,\"ts\":\"2024-06-01\",\"inner\":{\"ts\":\"y\"}}");
        let options = CompareOptions::default().with_exclude_keys(["ts"]).unwrap();
        let result = compare_values(&expected, &actual, &options);
        assert!(result.is_empty());
    }

    #[test]
    fn excluded_subtrees_are_not_recursed_into() {
        let expected = parse("{\"meta\":{\"a\":1,\"b\":[1,2,3]}}");
        let actual = parse("{\"meta\":{\"a\":2}}");
        let options = CompareOptions::default().with_exclude_keys(["meta"]).unwrap();
        let result = compare_values(&expected, &actual, &options);
        assert!(result.is_empty());
    }

    #[test]
    fn mapping_emission_follows_key_order() {
        let expected = parse("{\"a\":1,\"b\":2,\"z\":5}");
        let actual = parse("{\"a\":9,\"c\":3,\"z\":6}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let paths: Vec<String> =
            result.iter().map(|mismatch| mismatch.path.to_string()).collect();
        assert_eq!(paths, ["root.a", "root.b", "root.z", "root.c"]);
    }

    #[test]
    fn root_scalar_divergence_is_a_value_mismatch() {
        let expected = parse("1");
        let actual = parse("2");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        assert_eq!(result.mismatches()[0].kind, MismatchKind::ValueMismatch);
        assert!(result.mismatches()[0].path.is_empty());
    }

    #[test]
    fn nested_sequence_of_mappings_reports_key_level_paths() {
        let expected = parse("[{\"name\":\"a\",\"version\":1}]");
        let actual = parse("[{\"name\":\"a\",\"version\":2}]");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let want = ComparisonResult::from_mismatches(vec![Mismatch::value_mismatch(
            path_from_segments([PathSegment::index(0), PathSegment::key("version")]),
            parse("1"),
            parse("2"),
        )]);
        assert_eq!(result, want);
    }

    #[test]
    fn result_serde_round_trips() {
        let expected = parse("{\"a\":1,\"b\":[1,2]}");
        let actual = parse("{\"a\":2,\"b\":[1]}");
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        let json = serde_json::to_string(&result).unwrap();
        let decoded: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }
}
