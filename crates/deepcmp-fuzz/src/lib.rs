//! Fuzzing harnesses for the deepcmp structural difference engine.
//!
//! The helpers in this crate are intentionally lightweight so they can be
//! reused both from `cargo fuzz` targets and from property-based smoke
//! tests. Each public function accepts raw bytes and exercises a different
//! part of the canonicalization, comparison, and reporting pipelines while
//! swallowing any recoverable errors.
//!
//! # Examples
//!
//! Run the canonicalization harness on a JSON snippet:
//!
//! ```
//! deepcmp_fuzz::fuzz_canonicalization(b"{\"a\":1}");
//! ```
//!
//! Invoke the comparison harness on deterministic input:
//!
//! ```
//! deepcmp_fuzz::fuzz_compare(&[1, 2, 3, 4]);
//! ```
//!
//! Exercise the report harness with arbitrary bytes:
//!
//! ```
//! deepcmp_fuzz::fuzz_report(b"example");
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use deepcmp_core::{assert_equal, CompareOptions, ComparisonResult, ReportConfig, Value};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_SEQUENCE_LEN: u8 = 6;
const MAX_MAPPING_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the JSON and YAML canonicalization routines.
///
/// The function ignores decoding failures so that fuzzers can keep exploring.
///
/// ```
/// deepcmp_fuzz::fuzz_canonicalization(b"{\"key\":\"value\"}");
/// ```
pub fn fuzz_canonicalization(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Value::from_json_str(text);
        let _ = Value::from_yaml_str(text);
    }
}

/// Drives the comparator with randomly generated value pairs.
///
/// Checks the core contracts on every pair: the comparison is total,
/// deterministic, empty exactly when the values are structurally equal,
/// and its report always renders.
///
/// ```
/// deepcmp_fuzz::fuzz_compare(b"seed");
/// ```
pub fn fuzz_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(lhs) = random_value(&mut unstructured) else {
        return;
    };
    let Some(rhs) = random_value(&mut unstructured) else {
        return;
    };
    let options = CompareOptions::default();

    let result = lhs.compare(&rhs, &options);
    let again = lhs.compare(&rhs, &options);
    assert_eq!(result, again, "comparison must be deterministic");
    assert_eq!(
        result.is_empty(),
        lhs.eq_with_options(&rhs, &options),
        "empty result must coincide with structural equality",
    );
    assert_eq!(assert_equal(&lhs, &rhs, &options).is_err(), !result.is_empty());
    let _ = result.render(&ReportConfig::default());
}

/// Renders comparison results deserialized from arbitrary bytes.
///
/// The harness exercises the report renderer against any mismatch list the
/// serde layer accepts, not only engine-produced ones.
///
/// ```
/// deepcmp_fuzz::fuzz_report(b"report fuzz");
/// ```
pub fn fuzz_report(data: &[u8]) {
    if let Ok(result) = serde_json::from_slice::<ComparisonResult>(data) {
        let _ = result.render(&ReportConfig::default());
        let _ = result.render(&ReportConfig::default().with_color(true));
    }
}

fn random_value(unstructured: &mut Unstructured<'_>) -> Option<Value> {
    let json = json_value_from_unstructured(unstructured, 0).ok()?;
    Value::from_json_value(json).ok()
}

fn json_value_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return json_leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => json_number(unstructured),
        3 => json_string(unstructured),
        4 => {
            let len = unstructured.int_in_range::<u8>(0..=MAX_SEQUENCE_LEN)?;
            let mut items = Vec::with_capacity(len as usize);
            for _ in 0..len {
                items.push(json_value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => {
            let len = unstructured.int_in_range::<u8>(0..=MAX_MAPPING_LEN)?;
            let mut object = JsonMap::new();
            for _ in 0..len {
                let JsonValue::String(key) = json_string(unstructured)? else {
                    continue;
                };
                object.insert(key, json_value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Object(object))
        }
    }
}

fn json_leaf(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    match unstructured.int_in_range::<u8>(0..=3)? {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => json_number(unstructured),
        _ => json_string(unstructured),
    }
}

fn json_number(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let raw: f64 = unstructured.arbitrary()?;
    let finite = if raw.is_finite() { raw } else { 0.0 };
    let number = JsonNumber::from_f64(finite).unwrap_or_else(|| JsonNumber::from(0));
    Ok(JsonValue::Number(number))
}

fn json_string(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let len = unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?;
    let mut text = String::with_capacity(len as usize);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(b'a'..=b'z')?;
        text.push(char::from(byte));
    }
    Ok(JsonValue::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harnesses_accept_empty_input() {
        fuzz_canonicalization(&[]);
        fuzz_compare(&[]);
        fuzz_report(&[]);
    }

    #[test]
    fn report_harness_accepts_valid_results() {
        let data = b"[{\"path\":[\"a\"],\"kind\":\"value_mismatch\",\"expected\":1,\"actual\":2}]";
        fuzz_report(data);
    }
}
