//! Tree addressing: paths and expansion keys.

use std::fmt;

/// Address of a node in the tree: the sequence of segments from the root.
///
/// Object children are addressed by key, array children by decimal index
/// rendered as a string. The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// The root path (no segments).
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Build a path from owned segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Path(segments)
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no segments (same as [`Path::is_root`]).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate segments from root outward.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Return a new path with `segment` appended.
    pub fn join(&self, segment: &str) -> Path {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Path(segments)
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: String) {
        self.0.push(segment);
    }

    /// The path of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    /// The parent path, or the root if already at the root.
    pub fn parent(&self) -> Path {
        if self.0.is_empty() {
            Path::root()
        } else {
            Path(self.0[..self.0.len() - 1].to_vec())
        }
    }

    /// Canonical expansion-state key: segments joined with `.`.
    ///
    /// This is the one place the string encoding is produced. A literal `.`
    /// inside an object key is not escaped, so two distinct paths can map to
    /// the same key; kept as-is for compatibility with the encoding the
    /// stored state uses.
    pub fn expansion_key(&self) -> String {
        self.0.join(".")
    }

    /// Human-readable form: segments joined with ` > `.
    pub fn display_string(&self) -> String {
        self.0.join(" > ")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}
