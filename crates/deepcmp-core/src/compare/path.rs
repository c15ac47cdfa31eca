use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a single step within a comparison path.
///
/// A segment refers either to a mapping key or to a sequence index.
///
/// ```
/// # use deepcmp_core::PathSegment;
/// let key = PathSegment::key("name");
/// let index = PathSegment::index(2);
/// assert!(matches!(key, PathSegment::Key(_)));
/// assert!(matches!(index, PathSegment::Index(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key lookup.
    Key(String),
    /// Sequence index lookup.
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    #[must_use]
    pub fn key<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Key(value.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Key(key) => serializer.serialize_str(key),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl<'de> Deserialize<'de> for PathSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = PathSegment;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a string key or non-negative integer index")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let value = usize::try_from(v).map_err(|_| E::custom("index must be non-negative"))?;
                Ok(PathSegment::Index(value))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let value = usize::try_from(v).map_err(|_| E::custom("index exceeds usize"))?;
                Ok(PathSegment::Index(value))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// Represents the fully qualified location of a mismatch within a document.
///
/// Paths are immutable once attached to a mismatch; sibling traversals each
/// extend their own copy of the shared prefix.
///
/// ```
/// # use deepcmp_core::{Path, PathSegment};
/// let path = Path::new()
///     .with_segment(PathSegment::key("addresses"))
///     .with_segment(PathSegment::index(2))
///     .with_segment(PathSegment::key("zip"));
/// assert_eq!(path.to_string(), "root.addresses[2].zip");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// Creates the empty path denoting the comparison root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new segment, returning the extended path.
    #[must_use]
    pub fn with_segment(mut self, segment: PathSegment) -> Self {
        self.0.push(segment);
        self
    }

    /// Returns the underlying segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the path denotes the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pushes a new segment in-place.
    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// Pops the last segment off the path.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(value: Vec<PathSegment>) -> Self {
        Self(value)
    }
}

impl From<PathSegment> for Path {
    fn from(value: PathSegment) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for Path {
    /// Renders the human-readable breadcrumb, e.g. `root.users[3].email`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds a path from an iterator of segments.
///
/// ```
/// # use deepcmp_core::compare::{path_from_segments, PathSegment};
/// let path = path_from_segments([PathSegment::key("a"), PathSegment::index(1)]);
/// assert_eq!(path.len(), 2);
/// ```
#[must_use]
pub fn path_from_segments<I>(segments: I) -> Path
where
    I: IntoIterator<Item = PathSegment>,
{
    Path(segments.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_bare() {
        assert_eq!(Path::new().to_string(), "root");
    }

    #[test]
    fn extend_leaves_original_untouched() {
        let base = Path::from(PathSegment::key("user"));
        let child = base.clone().with_segment(PathSegment::key("email"));
        assert_eq!(base.len(), 1);
        assert_eq!(child.to_string(), "root.user.email");
    }

    #[test]
    fn serde_round_trip_for_segments() {
        let path = path_from_segments([PathSegment::key("foo"), PathSegment::index(3)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[\"foo\",3]");
        let decoded: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, path);
    }
}
