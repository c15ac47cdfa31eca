//! Benchmark harness support for the deepcmp structural difference engine.
//!
//! Exposes deterministic generators for synthetic nested documents so the
//! Criterion benchmarks (and smoke tests) can exercise the comparator on
//! inputs of controlled shape and size.
//!
//! # Examples
//!
//! ```
//! use deepcmp_benches::{nested_document, perturb};
//! use deepcmp_core::CompareOptions;
//!
//! let doc = nested_document(3, 3);
//! let changed = perturb(&doc);
//! let result = doc.compare(&changed, &CompareOptions::default());
//! assert!(!result.is_empty());
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::collections::BTreeMap;

use deepcmp_core::{Number, Value};

/// Builds a deterministic nested document of the given depth and fanout.
///
/// Every level is a mapping whose entries alternate between deeper mappings,
/// sequences of scalars, and scalar leaves, so all traversal branches of the
/// comparator are exercised.
#[must_use]
pub fn nested_document(depth: usize, fanout: usize) -> Value {
    if depth == 0 {
        return Value::Number(number(depth, 0));
    }

    let mut mapping = BTreeMap::new();
    for index in 0..fanout {
        let key = format!("field{index}");
        let child = match index % 3 {
            0 => nested_document(depth - 1, fanout),
            1 => Value::Sequence(
                (0..fanout).map(|item| Value::Number(number(depth, item))).collect(),
            ),
            _ => Value::String(format!("value-{depth}-{index}")),
        };
        mapping.insert(key, child);
    }
    Value::Mapping(mapping)
}

/// Returns a copy of the document with every boolean, numeric, and string
/// leaf altered in place.
///
/// Comparing a document against its perturbed copy yields one mismatch per
/// altered leaf, which makes result sizes predictable in benchmarks.
#[must_use]
pub fn perturb(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(!b),
        Value::Number(n) => Value::Number(Number::new(n.get() + 1.0).expect("finite number")),
        Value::String(s) => Value::String(format!("{s}*")),
        Value::Sequence(items) => Value::Sequence(items.iter().map(perturb).collect()),
        Value::Mapping(map) => Value::Mapping(
            map.iter().map(|(key, child)| (key.clone(), perturb(child))).collect(),
        ),
    }
}

fn number(depth: usize, index: usize) -> Number {
    Number::new((depth * 31 + index) as f64).expect("finite number")
}
