use std::collections::HashMap;

use crate::error::{GeometryError, OperationError, Result, TopologyError};
use crate::math::{round_to, Point3, LENGTH_DECIMALS, TOLERANCE};
use crate::topology::{Edge, EdgeGraph, EdgeId, EdgeKey, Face, Vertex, VertexId};

/// Derives the undirected edge graph from a closed triangle mesh.
///
/// Each face contributes its edges (a, b), (b, c), (c, a). Edges are keyed by
/// their sorted endpoint pair so the copy seen from the neighbouring face
/// collapses onto the first record. An edge is deleted if either endpoint is;
/// a face is deleted if any corner is. Finally every vertex is linked to all
/// edges it belongs to.
pub struct BuildEdgeGraph<'a> {
    positions: &'a [Point3],
    faces: &'a [[u32; 3]],
    deleted: &'a [bool],
}

impl<'a> BuildEdgeGraph<'a> {
    /// Creates a new `BuildEdgeGraph` operation.
    ///
    /// `deleted` is the slice mask, one entry per position.
    #[must_use]
    pub fn new(positions: &'a [Point3], faces: &'a [[u32; 3]], deleted: &'a [bool]) -> Self {
        Self {
            positions,
            faces,
            deleted,
        }
    }

    /// Executes the build, returning the linked graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are inconsistent, a face is degenerate,
    /// an edge has zero length, or the mesh is not a closed 2-manifold
    /// (some edge is not shared by exactly two faces).
    pub fn execute(&self) -> Result<EdgeGraph> {
        if self.deleted.len() != self.positions.len() {
            return Err(OperationError::InvalidInput(format!(
                "slice mask has {} entries for {} vertices",
                self.deleted.len(),
                self.positions.len()
            ))
            .into());
        }
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("face list is empty".into()).into());
        }

        let mut graph = EdgeGraph {
            vertices: self
                .positions
                .iter()
                .zip(self.deleted)
                .map(|(&p, &d)| Vertex::new(p, d))
                .collect(),
            ..EdgeGraph::default()
        };

        for (i, tri) in self.faces.iter().enumerate() {
            let corners = self.corners(i, *tri)?;
            let deleted = corners.iter().any(|v| graph.vertices[v.index()].deleted);
            graph.faces.push(Face::new(corners, deleted));
        }

        let uses = collect_edges(&mut graph)?;

        let offending = uses.values().filter(|&&count| count != 2).count();
        if offending > 0 {
            return Err(TopologyError::NonManifold {
                edges: graph.edges.len(),
                faces: graph.faces.len(),
                offending,
            }
            .into());
        }

        link_vertices(&mut graph);

        tracing::debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            faces = graph.faces.len(),
            "built edge graph"
        );
        Ok(graph)
    }

    fn corners(&self, face: usize, tri: [u32; 3]) -> Result<[VertexId; 3]> {
        let len = self.positions.len();
        for index in tri {
            let index = index as usize;
            if index >= len {
                return Err(TopologyError::IndexOutOfRange { index, len }.into());
            }
        }
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[2] == tri[0] {
            return Err(TopologyError::DegenerateFace { face }.into());
        }
        Ok(tri.map(VertexId::new))
    }
}

/// Deduplicates face edges into `graph.edges`, returning how many faces use
/// each key.
fn collect_edges(graph: &mut EdgeGraph) -> Result<HashMap<EdgeKey, usize>> {
    let mut uses: HashMap<EdgeKey, usize> = HashMap::with_capacity(graph.faces.len() * 3 / 2);

    for f in 0..graph.faces.len() {
        for (a, b) in graph.faces[f].edge_pairs() {
            let key = EdgeKey::new(a, b);
            let count = uses.entry(key).or_insert(0);
            *count += 1;
            if *count > 1 {
                continue;
            }

            let start = &graph.vertices[key.lo.index()];
            let end = &graph.vertices[key.hi.index()];
            let distance = (end.position - start.position).norm();
            if !distance.is_finite() || distance < TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "edge {}-{} has zero or non-finite length",
                    key.lo, key.hi
                ))
                .into());
            }

            let id = EdgeId::from_usize(graph.edges.len());
            graph.edges.push(Edge {
                key,
                length: round_to(distance, LENGTH_DECIMALS),
                deleted: start.deleted || end.deleted,
            });
            graph.lookup.insert(key, id);
        }
    }

    Ok(uses)
}

fn link_vertices(graph: &mut EdgeGraph) {
    for (i, edge) in graph.edges.iter().enumerate() {
        let id = EdgeId::from_usize(i);
        graph.vertices[edge.key.lo.index()].edges.push(id);
        graph.vertices[edge.key.hi.index()].edges.push(id);
    }
}
