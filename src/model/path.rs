//! Typed paths into value trees.
//!
//! A path is a sequence of object keys and array indices. It renders as a
//! JSON Pointer (RFC 6901), which is also the form ignore patterns match
//! against and the form reported in field diffs.

use std::fmt;

/// One step of a [`ValuePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member name
    Key(String),
    /// Array element index
    Index(usize),
}

impl PathSegment {
    /// The key, if this segment is an object member.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(&k.replace('~', "~0").replace('/', "~1")),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A path from the root of a value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// The empty path, addressing the whole tree.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a JSON Pointer. All-digit tokens become indices.
    ///
    /// Intended for tests and configuration; the diff engine builds paths
    /// structurally while it walks.
    #[must_use]
    pub fn from_pointer(pointer: &str) -> Self {
        let segments = pointer
            .split('/')
            .skip(1)
            .map(|token| {
                if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(i) = token.parse() {
                        return PathSegment::Index(i);
                    }
                }
                PathSegment::Key(token.replace("~1", "/").replace("~0", "~"))
            })
            .collect();
        Self { segments }
    }

    /// A new path one object member deeper.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// A new path one array element deeper.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment's key, if it names an object member.
    #[must_use]
    pub fn last_key(&self) -> Option<&str> {
        self.segments.last().and_then(PathSegment::as_key)
    }

    /// Render as a JSON Pointer string.
    #[must_use]
    pub fn to_pointer(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for ValuePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        assert_eq!(ValuePath::root().to_pointer(), "");
        assert!(ValuePath::root().is_root());
    }

    #[test]
    fn test_builds_pointer() {
        let p = ValuePath::root().key("ebs_block_device").index(0).key("volume_size");
        assert_eq!(p.to_pointer(), "/ebs_block_device/0/volume_size");
        assert_eq!(p.last_key(), Some("volume_size"));
    }

    #[test]
    fn test_escapes_keys() {
        let p = ValuePath::root().key("tags").key("a/b~c");
        assert_eq!(p.to_pointer(), "/tags/a~1b~0c");
        assert_eq!(ValuePath::from_pointer("/tags/a~1b~0c"), p);
    }

    #[test]
    fn test_from_pointer_indices() {
        let p = ValuePath::from_pointer("/ingress/3/cidr_blocks");
        assert_eq!(
            p.segments(),
            &[
                PathSegment::Key("ingress".to_string()),
                PathSegment::Index(3),
                PathSegment::Key("cidr_blocks".to_string()),
            ]
        );
        assert!(ValuePath::from_pointer("").is_root());
    }
}
