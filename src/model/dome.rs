use crate::operations::classify::{Hub, StrutTable, StrutType, StrutTypeId};
use crate::topology::{Edge, EdgeGraph, EdgeId, Face, FaceId, Vertex, VertexId};

use super::{DomeParams, DomeReport};

/// The assembled structural model of one dome build.
///
/// Owns the full graph (including sliced-away records) and the derived
/// classification. Retained views filter on the deletion flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DomeModel {
    pub(crate) params: DomeParams,
    pub(crate) graph: EdgeGraph,
    pub(crate) struts: StrutTable,
    pub(crate) hubs: Vec<Hub>,
}

/// An edge together with its strut type.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedEdge<'a> {
    /// Edge index.
    pub id: EdgeId,
    /// Edge record.
    pub edge: &'a Edge,
    /// Type index, which is also the color class.
    pub type_id: StrutTypeId,
    /// Type record.
    pub strut_type: &'a StrutType,
}

impl DomeModel {
    /// Parameters the model was built with.
    #[must_use]
    pub fn params(&self) -> &DomeParams {
        &self.params
    }

    /// The full vertex/edge/face graph.
    #[must_use]
    pub fn graph(&self) -> &EdgeGraph {
        &self.graph
    }

    /// Vertices that survived the slice, with their stable indices.
    pub fn retained_vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.graph.retained_vertices()
    }

    /// Faces that survived the slice, each carrying its category.
    pub fn retained_faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.graph.retained_faces()
    }

    /// Every edge, deleted or not, with its strut type.
    pub fn edges(&self) -> impl Iterator<Item = ClassifiedEdge<'_>> {
        self.graph
            .edges()
            .iter()
            .zip(&self.struts.edge_types)
            .enumerate()
            .map(|(i, (edge, &type_id))| ClassifiedEdge {
                id: EdgeId::from_usize(i),
                edge,
                type_id,
                strut_type: &self.struts.types[type_id.index()],
            })
    }

    /// Retained edges only: the physical struts.
    pub fn struts(&self) -> impl Iterator<Item = ClassifiedEdge<'_>> {
        self.edges().filter(|e| !e.edge.deleted)
    }

    /// Hubs in vertex order.
    #[must_use]
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// Strut types in ascending length order.
    #[must_use]
    pub fn strut_types(&self) -> &[StrutType] {
        &self.struts.types
    }

    /// Summarizes the model for a cut list.
    #[must_use]
    pub fn report(&self) -> DomeReport {
        DomeReport {
            hubs: self.hubs.len(),
            struts: self.graph.retained_edges().count(),
            faces: self.graph.retained_faces().count(),
            strut_types: self.struts.types.clone(),
        }
    }
}
