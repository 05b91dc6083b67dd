use crate::error::Result;
use crate::operations::classify::{ClassifyFaces, ClassifyHubs, ClassifyStruts};
use crate::operations::graph::{BuildEdgeGraph, SliceFilter};
use crate::operations::shaping::{OffsetForPrint, Project};
use crate::polyhedron::{BasePolyhedron, LatticeSubdivision, Subdivide};

use super::{DomeModel, DomeParams};

/// Builds a [`DomeModel`] from a base solid.
///
/// Runs the whole pipeline in order: subdivide, project, slice, build and
/// link the edge graph, classify faces, optionally offset for print,
/// classify struts, classify hubs. Nothing is reused between builds.
pub struct BuildDome<'a, S = LatticeSubdivision> {
    base: &'a BasePolyhedron,
    params: DomeParams,
    provider: S,
}

impl<'a> BuildDome<'a> {
    /// Creates a new `BuildDome` operation using [`LatticeSubdivision`].
    #[must_use]
    pub fn new(base: &'a BasePolyhedron, params: DomeParams) -> Self {
        Self {
            base,
            params,
            provider: LatticeSubdivision,
        }
    }
}

impl<'a, S: Subdivide> BuildDome<'a, S> {
    /// Swaps in a different subdivision provider.
    #[must_use]
    pub fn with_provider<T: Subdivide>(self, provider: T) -> BuildDome<'a, T> {
        BuildDome {
            base: self.base,
            params: self.params,
            provider,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the provider fails,
    /// the refined mesh is degenerate or not closed, or a strut angle is
    /// undefined.
    pub fn execute(&self) -> Result<DomeModel> {
        let p = self.params;
        p.validate()?;

        let mesh = self.provider.subdivide(self.base, p.level)?;
        let positions =
            Project::new(p.level, p.radius, p.project_to_sphere).execute(&mesh.vertices)?;
        let deleted = SliceFilter::new(p.slice_height, p.radius).execute(&positions);

        let mut graph = BuildEdgeGraph::new(&positions, &mesh.faces, &deleted).execute()?;
        ClassifyFaces::new().execute(&mut graph);
        if p.offset_for_print {
            OffsetForPrint::new(p.radius).execute(&mut graph);
        }

        let struts = ClassifyStruts::new(p.radius).execute(&graph)?;
        let hubs = ClassifyHubs::new().execute(&graph)?;

        let model = DomeModel {
            params: p,
            graph,
            struts,
            hubs,
        };
        tracing::debug!(level = p.level, "built dome\n{}", model.report());
        Ok(model)
    }
}
