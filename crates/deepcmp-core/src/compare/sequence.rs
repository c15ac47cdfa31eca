use super::{engine::Frame, Mismatch, Path, PathSegment};
use crate::Value;

/// Compares two sequences position by position.
///
/// A length divergence is recorded once at the sequence's own path, carrying
/// both full sequences; the overlapping index range is still compared, so a
/// short tail never masks item-level divergences.
pub(super) fn compare_sequences<'a>(
    expected: &'a [Value],
    actual: &'a [Value],
    path: Path,
    pending: &mut Vec<Frame<'a>>,
    mismatches: &mut Vec<Mismatch>,
) {
    if expected.len() != actual.len() {
        mismatches.push(Mismatch::length_mismatch(
            path.clone(),
            Value::Sequence(expected.to_vec()),
            Value::Sequence(actual.to_vec()),
        ));
    }
    let overlap = expected.len().min(actual.len());
    for index in (0..overlap).rev() {
        pending.push(Frame {
            path: path.clone().with_segment(PathSegment::index(index)),
            expected: Some(&expected[index]),
            actual: Some(&actual[index]),
        });
    }
}
