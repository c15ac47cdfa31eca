use super::{Mismatch, Path, PathSegment};
use crate::{CompareOptions, Value};

/// Applies the scalar-equality policy to a same-kind scalar pair.
///
/// Numbers compare numerically within the configured tolerance; integer and
/// floating forms already share one representation, so `1` equals `1.0`. An
/// unequal pair at a sequence position is a sequence-item mismatch, anywhere
/// else a value mismatch.
pub(super) fn compare_scalars(
    expected: &Value,
    actual: &Value,
    path: Path,
    options: &CompareOptions,
    mismatches: &mut Vec<Mismatch>,
) {
    let equal = match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
        (Value::Number(lhs), Value::Number(rhs)) => {
            lhs.equals_with_precision(*rhs, options.precision())
        }
        (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
        _ => false,
    };
    if equal {
        return;
    }

    let at_index = matches!(path.last(), Some(PathSegment::Index(_)));
    let mismatch = if at_index {
        Mismatch::sequence_item_mismatch(path, expected.clone(), actual.clone())
    } else {
        Mismatch::value_mismatch(path, expected.clone(), actual.clone())
    };
    mismatches.push(mismatch);
}
