use std::collections::BTreeMap;

use super::{engine::Frame, Path, PathSegment};
use crate::Value;

/// Queues one frame per union key of two mappings.
///
/// Expected-side keys come first in their iteration order, then keys present
/// only in the actual mapping; pairs present on both sides recurse, one-sided
/// keys surface as missing-key frames. Exclusion is checked when the frame is
/// popped, so excluded subtrees are dropped before any descent.
pub(super) fn queue_entries<'a>(
    expected: &'a BTreeMap<String, Value>,
    actual: &'a BTreeMap<String, Value>,
    path: &Path,
    pending: &mut Vec<Frame<'a>>,
) {
    let mut frames = Vec::with_capacity(expected.len() + actual.len());
    for (key, value) in expected {
        frames.push(Frame {
            path: path.clone().with_segment(PathSegment::key(key.clone())),
            expected: Some(value),
            actual: actual.get(key),
        });
    }
    for (key, value) in actual {
        if expected.contains_key(key) {
            continue;
        }
        frames.push(Frame {
            path: path.clone().with_segment(PathSegment::key(key.clone())),
            expected: None,
            actual: Some(value),
        });
    }
    // LIFO stack: reversed push preserves key order on pop.
    pending.extend(frames.into_iter().rev());
}
