use crate::math::Point3;

use super::edge::EdgeId;

index_type! {
    /// Stable index of a vertex, assigned when the mesh is refined.
    pub struct VertexId;
}

/// Data associated with a vertex of the edge graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// `true` if the vertex lies at or below the slice plane.
    pub deleted: bool,
    /// Every edge that has this vertex as an endpoint, deleted or not.
    pub edges: Vec<EdgeId>,
}

impl Vertex {
    /// Creates an unlinked vertex at the given point.
    #[must_use]
    pub fn new(position: Point3, deleted: bool) -> Self {
        Self {
            position,
            deleted,
            edges: Vec::new(),
        }
    }

    /// Number of incident edges, including deleted ones.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
