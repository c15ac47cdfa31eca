use super::{mapping, scalar, sequence, ComparisonResult, Mismatch, Path};
use crate::{CompareOptions, Value};

/// One pending unit of comparison work.
///
/// An absent side means the other side's mapping carried a key this one
/// lacks; popping such a frame emits the corresponding missing-key record.
pub(super) struct Frame<'a> {
    pub(super) path: Path,
    pub(super) expected: Option<&'a Value>,
    pub(super) actual: Option<&'a Value>,
}

/// Work-list traversal of two values in lock-step.
///
/// Children are pushed in reverse onto the LIFO stack, so frames pop in the
/// depth-first pre-order the taxonomy's ordering guarantees rely on. The
/// explicit stack keeps call-stack usage constant regardless of how deeply
/// the inputs nest.
pub(super) fn compare_values(
    expected: &Value,
    actual: &Value,
    options: &CompareOptions,
) -> ComparisonResult {
    let mut mismatches = Vec::new();
    let mut pending =
        vec![Frame { path: Path::new(), expected: Some(expected), actual: Some(actual) }];

    while let Some(frame) = pending.pop() {
        if frame.path.last().is_some_and(|segment| options.excludes(segment)) {
            continue;
        }
        match (frame.expected, frame.actual) {
            (Some(expected), Some(actual)) => {
                compare_pair(expected, actual, frame.path, options, &mut pending, &mut mismatches);
            }
            (Some(expected), None) => {
                mismatches.push(Mismatch::missing_in_actual(frame.path, expected.clone()));
            }
            (None, Some(actual)) => {
                mismatches.push(Mismatch::missing_in_expected(frame.path, actual.clone()));
            }
            (None, None) => {}
        }
    }

    ComparisonResult::from_mismatches(mismatches)
}

fn compare_pair<'a>(
    expected: &'a Value,
    actual: &'a Value,
    path: Path,
    options: &CompareOptions,
    pending: &mut Vec<Frame<'a>>,
    mismatches: &mut Vec<Mismatch>,
) {
    if expected.kind() != actual.kind() {
        // Incomparable pair: record the clash, do not descend.
        mismatches.push(Mismatch::type_mismatch(path, expected.clone(), actual.clone()));
        return;
    }
    match (expected, actual) {
        (Value::Mapping(lhs), Value::Mapping(rhs)) => {
            mapping::queue_entries(lhs, rhs, &path, pending);
        }
        (Value::Sequence(lhs), Value::Sequence(rhs)) => {
            sequence::compare_sequences(lhs, rhs, path, pending, mismatches);
        }
        _ => scalar::compare_scalars(expected, actual, path, options, mismatches),
    }
}

#[cfg(test)]
mod tests {
    use crate::{compare::compare_values, CompareOptions, Value};

    // Recursion would overflow the default test-thread stack at this depth.
    // Kept moderate: copy-on-extend paths make a unary chain quadratic.
    #[test]
    fn deeply_nested_input_does_not_exhaust_the_stack() {
        let depth = 20_000;
        let mut expected = Value::Null;
        let mut actual = Value::Bool(true);
        for _ in 0..depth {
            expected = Value::Sequence(vec![expected]);
            actual = Value::Sequence(vec![actual]);
        }
        let result = compare_values(&expected, &actual, &CompareOptions::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result.mismatches()[0].path.len(), depth);
        drain(expected);
        drain(actual);
    }

    // The default drop glue recurses per nesting level; tear down iteratively.
    fn drain(value: Value) {
        let mut stack = vec![value];
        while let Some(value) = stack.pop() {
            match value {
                Value::Sequence(items) => stack.extend(items),
                Value::Mapping(map) => stack.extend(map.into_values()),
                _ => {}
            }
        }
    }
}
