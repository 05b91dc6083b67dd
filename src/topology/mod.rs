/// Declares a typed `u32` index into one of the graph arenas.
macro_rules! index_type {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw index.
            #[must_use]
            pub fn new(index: u32) -> Self {
                Self(index)
            }

            /// Position in the owning arena.
            #[must_use]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[allow(clippy::cast_possible_truncation)]
            pub(crate) fn from_usize(index: usize) -> Self {
                Self(index as u32)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{Edge, EdgeId, EdgeKey};
pub use face::{Face, FaceCategory, FaceId};
pub use vertex::{Vertex, VertexId};

use std::collections::HashMap;

use crate::error::TopologyError;

/// Arena holding the vertices, deduplicated edges and faces of one build.
///
/// Records reference each other only through typed indices, so the whole
/// graph is invalidated by dropping it rather than by graph surgery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) lookup: HashMap<EdgeKey, EdgeId>,
}

impl EdgeGraph {
    // --- Vertex operations ---

    /// All vertices, deleted or not, in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a reference to the vertex, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is outside the arena.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, TopologyError> {
        self.vertices
            .get(id.index())
            .ok_or_else(|| TopologyError::EntityNotFound(format!("vertex {id}")))
    }

    /// Iterates over vertices that survived the slice.
    pub fn retained_vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.deleted)
            .map(|(i, v)| (VertexId::from_usize(i), v))
    }

    // --- Edge operations ---

    /// All edges, deleted or not, in creation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a reference to the edge, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is outside the arena.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, TopologyError> {
        self.edges
            .get(id.index())
            .ok_or_else(|| TopologyError::EntityNotFound(format!("edge {id}")))
    }

    /// Looks up the edge joining two vertices, in either order.
    #[must_use]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.lookup.get(&EdgeKey::new(a, b)).copied()
    }

    /// Iterates over edges with neither endpoint deleted.
    pub fn retained_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.deleted)
            .map(|(i, e)| (EdgeId::from_usize(i), e))
    }

    // --- Face operations ---

    /// All faces, deleted or not, in provider order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns a reference to the face, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is outside the arena.
    pub fn face(&self, id: FaceId) -> Result<&Face, TopologyError> {
        self.faces
            .get(id.index())
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face {id}")))
    }

    /// Iterates over faces with no deleted corner.
    pub fn retained_faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.deleted)
            .map(|(i, f)| (FaceId::from_usize(i), f))
    }

    /// Number of non-deleted edges incident to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex or one of its edges is not found.
    pub fn valence(&self, id: VertexId) -> Result<usize, TopologyError> {
        let vertex = self.vertex(id)?;
        let mut count = 0;
        for &edge in &vertex.edges {
            if !self.edge(edge)?.deleted {
                count += 1;
            }
        }
        Ok(count)
    }
}
