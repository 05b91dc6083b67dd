use crate::topology::{EdgeGraph, FaceCategory, VertexId};

/// Assigns each face its [`FaceCategory`].
///
/// Deleted faces are hidden. A retained face touching a degree-5 vertex is
/// pentagonal; otherwise one touching a vertex with a sliced-away edge is a
/// boundary face; everything else is interior. Degree here counts all
/// incident edges, so pentagon marking does not shift with the slice.
#[derive(Debug, Default)]
pub struct ClassifyFaces;

impl ClassifyFaces {
    /// Creates a new `ClassifyFaces` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the classification, updating face categories in place.
    pub fn execute(&self, graph: &mut EdgeGraph) {
        let categories: Vec<FaceCategory> = graph
            .faces
            .iter()
            .map(|face| {
                if face.deleted {
                    FaceCategory::Hidden
                } else if face.vertices.iter().any(|&v| is_pentagon(graph, v)) {
                    FaceCategory::Pentagonal
                } else if face.vertices.iter().any(|&v| is_on_cut(graph, v)) {
                    FaceCategory::Boundary
                } else {
                    FaceCategory::Interior
                }
            })
            .collect();

        for (face, category) in graph.faces.iter_mut().zip(categories) {
            face.category = category;
        }
    }
}

fn is_pentagon(graph: &EdgeGraph, v: VertexId) -> bool {
    let vertex = &graph.vertices[v.index()];
    !vertex.deleted && vertex.degree() == 5
}

fn is_on_cut(graph: &EdgeGraph, v: VertexId) -> bool {
    graph.vertices[v.index()]
        .edges
        .iter()
        .any(|e| graph.edges[e.index()].deleted)
}
