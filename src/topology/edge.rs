use super::vertex::VertexId;

index_type! {
    /// Index of a deduplicated edge in the edge graph.
    pub struct EdgeId;
}

/// Canonical identity of an undirected edge: its endpoints sorted ascending.
///
/// The same geometric edge reached from either adjacent face produces the
/// same key, which is what collapses shared face edges into one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// Lower vertex index.
    pub lo: VertexId,
    /// Higher vertex index.
    pub hi: VertexId,
}

impl EdgeKey {
    /// Creates the canonical key for the pair, in either order.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns `true` if `v` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        self.lo == v || self.hi == v
    }

    /// Returns the endpoint opposite `v`, or `None` if `v` is not on the edge.
    #[must_use]
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if v == self.lo {
            Some(self.hi)
        } else if v == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

/// Data associated with an edge of the graph.
///
/// Edges are never physically removed: a sliced-away edge keeps its record
/// with `deleted` set so adjacency can still be queried.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Sorted endpoint pair.
    pub key: EdgeKey,
    /// Endpoint distance rounded to [`crate::math::LENGTH_DECIMALS`] places.
    pub length: f64,
    /// `true` if either endpoint is deleted.
    pub deleted: bool,
}

impl Edge {
    /// Start vertex (the lower index).
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.key.lo
    }

    /// End vertex (the higher index).
    #[must_use]
    pub fn end(&self) -> VertexId {
        self.key.hi
    }
}
