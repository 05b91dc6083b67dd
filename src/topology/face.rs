use super::vertex::VertexId;

index_type! {
    /// Index of a triangular face.
    pub struct FaceId;
}

/// Role of a face in the rendered dome, doubling as its material index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceCategory {
    /// Touches a sliced-away vertex; never drawn.
    Hidden,
    /// Ordinary retained face.
    #[default]
    Interior,
    /// Retained face touching a degree-5 vertex.
    Pentagonal,
    /// Retained face touching a vertex on the cut.
    Boundary,
}

impl FaceCategory {
    /// Material slot used by the renderer.
    #[must_use]
    pub fn material_index(self) -> usize {
        match self {
            Self::Hidden => 0,
            Self::Interior => 1,
            Self::Pentagonal => 2,
            Self::Boundary => 3,
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub fn hex_color(self) -> &'static str {
        match self {
            Self::Hidden => "#ff0000",
            Self::Interior => "#dddddd",
            Self::Pentagonal => "#121ddd",
            Self::Boundary => "#15dd46",
        }
    }
}

/// A triangle of the refined mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Corner vertices (a, b, c) in winding order.
    pub vertices: [VertexId; 3],
    /// `true` if any corner is deleted.
    pub deleted: bool,
    /// Role assigned by face classification.
    pub category: FaceCategory,
}

impl Face {
    /// Creates a face; deleted faces start out [`FaceCategory::Hidden`].
    #[must_use]
    pub fn new(vertices: [VertexId; 3], deleted: bool) -> Self {
        Self {
            vertices,
            deleted,
            category: if deleted {
                FaceCategory::Hidden
            } else {
                FaceCategory::Interior
            },
        }
    }

    /// The three edges as (a, b), (b, c), (c, a).
    #[must_use]
    pub fn edge_pairs(&self) -> [(VertexId, VertexId); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// Returns `true` if `v` is a corner of this face.
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }
}
