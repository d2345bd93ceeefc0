//! Identity types for matching nodes across commits.
//!
//! Every commit rebuilds the component tree from scratch, so nothing about a
//! node's backing object survives from one commit to the next. What does
//! survive is its *position*: the path from the root down to the node. A
//! [`GlobalKey`] is that path, and an [`IdentityKey`] pairs it with a slot
//! index so a single node can own several independent transition creators.

use std::fmt;
use std::sync::Arc;

/// Separator between path segments in a [`GlobalKey`].
const SEGMENT_SEPARATOR: char = ',';

/// Marks the sibling index appended to a repeated segment.
const INDEX_MARKER: char = '!';

const ESCAPE: char = '%';

/// Path of a node within its root, e.g. `root,Row,Text!1`.
///
/// Segment names are escaped so that `,`, `!` and `%` never appear in them
/// literally; the only `!` in a segment is the sibling index appended by
/// [`GlobalKey::child_indexed`]. Distinct `(parent, name, index)` triples
/// therefore always give distinct keys. Cloning is cheap: the path is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalKey(Arc<str>);

impl GlobalKey {
    /// Key of a tree root.
    pub fn root(name: &str) -> Self {
        let mut path = String::with_capacity(name.len());
        push_escaped(&mut path, name);
        Self(Arc::from(path))
    }

    /// Key of the first child of this node named `segment`.
    pub fn child(&self, segment: &str) -> Self {
        self.child_indexed(segment, 0)
    }

    /// Key of the `index`-th sibling named `segment`. Index 0 carries no
    /// suffix, later ones get `!index`.
    pub fn child_indexed(&self, segment: &str, index: u32) -> Self {
        let mut path = String::with_capacity(self.0.len() + 1 + segment.len());
        path.push_str(&self.0);
        path.push(SEGMENT_SEPARATOR);
        push_escaped(&mut path, segment);
        if index > 0 {
            path.push(INDEX_MARKER);
            path.push_str(&index.to_string());
        }
        Self(Arc::from(path))
    }

    /// The key of the parent node, or `None` for a root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind(SEGMENT_SEPARATOR)
            .map(|idx| Self(Arc::from(&self.0[..idx])))
    }

    /// Number of ancestors between this node and its root (0 for a root).
    pub fn depth(&self) -> usize {
        self.0.matches(SEGMENT_SEPARATOR).count()
    }

    /// The last path segment, escaped and with its sibling index.
    pub fn segment(&self) -> &str {
        match self.0.rfind(SEGMENT_SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The full escaped path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_escaped(path: &mut String, segment: &str) {
    for ch in segment.chars() {
        match ch {
            ESCAPE => path.push_str("%25"),
            SEGMENT_SEPARATOR => path.push_str("%2C"),
            INDEX_MARKER => path.push_str("%21"),
            c => path.push(c),
        }
    }
}

impl fmt::Debug for GlobalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlobalKey({})", self.0)
    }
}

impl fmt::Display for GlobalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identity of one transition creator across commits.
///
/// Two keys are equal iff both the path and the slot match. The slot tells
/// apart creators that belong to the same node: the node's own render-data
/// creator uses slot 0, transition hooks use their index + 1.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct IdentityKey {
    global_key: GlobalKey,
    slot: u32,
}

impl IdentityKey {
    /// Key for the creator in `slot` of the node at `global_key`.
    pub fn new(global_key: GlobalKey, slot: u32) -> Self {
        Self { global_key, slot }
    }

    /// Path of the node owning the creator.
    pub fn global_key(&self) -> &GlobalKey {
        &self.global_key
    }

    /// Slot of the creator on its node.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.global_key, self.slot)
    }
}
