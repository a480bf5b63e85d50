//! Identity-bearing graph vertices.
//!
//! A [`Vertex`] is a cheap handle: clones share the same identity and the same
//! label cell, so relabelling through any clone is visible to every holder,
//! including the graph that stores it.

use std::{
    cell::RefCell,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identifier assigned to each [`Vertex`] at creation.
///
/// Identifiers increase monotonically, so ordering by id is creation order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(u64);

impl VertexId {
    fn fresh() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct VertexInner {
    id: VertexId,
    label: RefCell<String>,
}

/// A graph vertex compared and hashed by identity, never by label.
///
/// # Examples
/// ```
/// use ugraph_core::Vertex;
///
/// let first = Vertex::new("a");
/// let second = Vertex::new("a");
/// assert_ne!(first, second);
///
/// let alias = first.clone();
/// alias.set_label("b");
/// assert_eq!(first.label(), "b");
/// assert_eq!(first, alias);
/// ```
#[derive(Clone)]
pub struct Vertex {
    inner: Rc<VertexInner>,
}

impl Vertex {
    /// Creates a vertex with a fresh identity and the given display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(VertexInner {
                id: VertexId::fresh(),
                label: RefCell::new(label.into()),
            }),
        }
    }

    /// Creates a vertex with a fresh identity and an empty label.
    #[must_use]
    pub fn unlabelled() -> Self {
        Self::new(String::new())
    }

    /// Returns the identity of this vertex.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.inner.id
    }

    /// Returns a copy of the current label.
    #[must_use]
    pub fn label(&self) -> String {
        self.inner.label.borrow().clone()
    }

    /// Replaces the label for every handle sharing this vertex.
    pub fn set_label(&self, label: impl Into<String>) {
        self.inner.label.replace(label.into());
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::unlabelled()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.id.cmp(&other.inner.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex('{}')", self.inner.label.borrow())
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
