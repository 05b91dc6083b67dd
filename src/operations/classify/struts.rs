use std::collections::HashMap;

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::{round_to, ANGLE_DECIMALS, TOLERANCE};
use crate::topology::{Edge, EdgeGraph, EdgeId};

/// Edge colors, indexed by color class (wrapping).
pub const EDGE_PALETTE: [&str; 9] = [
    "#ac1719", "#4fb03d", "#e5672c", "#ffcc19", "#49afff", "#5e9fff", "#808cff", "#a574f3",
    "#c753dc",
];

/// Index of a strut type in a [`StrutTable`], ordered by ascending length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrutTypeId(usize);

impl StrutTypeId {
    /// Position in [`StrutTable::types`]; also the edge color class.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Renderer color for the class.
    #[must_use]
    pub fn hex_color(self) -> &'static str {
        EDGE_PALETTE[self.0 % EDGE_PALETTE.len()]
    }
}

/// One length class of struts.
#[derive(Debug, Clone, PartialEq)]
pub struct StrutType {
    /// Sequential label: `A`, `B`, .. `Z`, `AA`, ..
    pub label: String,
    /// Shared rounded length.
    pub length: f64,
    /// `length / radius`, for scaling the cut list to any dome size.
    pub chord_factor: f64,
    /// Number of retained struts in the class.
    pub count: usize,
    /// Bevel angle in degrees between the strut and its hub, sampled from the
    /// first retained member. `None` when every member is sliced away.
    pub angle: Option<f64>,
}

/// Strut types plus the type of every edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrutTable {
    /// Types in ascending length order.
    pub types: Vec<StrutType>,
    /// Type of each edge, parallel to [`EdgeGraph::edges`].
    pub edge_types: Vec<StrutTypeId>,
}

impl StrutTable {
    /// Returns the type of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the table.
    pub fn type_of(&self, edge: EdgeId) -> Result<(StrutTypeId, &StrutType)> {
        let id = self
            .edge_types
            .get(edge.index())
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound(format!("edge {edge}")))?;
        Ok((id, &self.types[id.index()]))
    }
}

/// Groups edges into strut types by rounded length.
///
/// Every edge, deleted or not, takes part in labelling, so labels stay put
/// as the slice moves. Counts and sample angles only look at retained edges.
pub struct ClassifyStruts {
    radius: f64,
}

impl ClassifyStruts {
    /// Creates a new `ClassifyStruts` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns an error if a sampled strut has an endpoint at the origin or
    /// zero length, where the bevel angle is undefined.
    pub fn execute(&self, graph: &EdgeGraph) -> Result<StrutTable> {
        let mut lengths: Vec<f64> = graph.edges().iter().map(|e| e.length).collect();
        lengths.sort_by(f64::total_cmp);
        lengths.dedup();

        let class_of: HashMap<u64, StrutTypeId> = lengths
            .iter()
            .enumerate()
            .map(|(i, l)| (l.to_bits(), StrutTypeId(i)))
            .collect();

        let mut types: Vec<StrutType> = lengths
            .iter()
            .enumerate()
            .map(|(i, &length)| StrutType {
                label: strut_label(i),
                length,
                chord_factor: length / self.radius,
                count: 0,
                angle: None,
            })
            .collect();

        let mut edge_types = Vec::with_capacity(graph.edges().len());
        for edge in graph.edges() {
            let id = class_of
                .get(&edge.length.to_bits())
                .copied()
                .ok_or_else(|| {
                    GeometryError::Degenerate(format!("edge length {} has no class", edge.length))
                })?;
            edge_types.push(id);

            if edge.deleted {
                continue;
            }
            let class = &mut types[id.index()];
            if class.count == 0 {
                class.angle = Some(strut_angle(graph, edge)?);
            }
            class.count += 1;
        }

        tracing::debug!(types = types.len(), "classified struts");
        Ok(StrutTable { types, edge_types })
    }
}

/// Bevel angle, in degrees, between a strut and the hub at its start.
///
/// The hub normal is the start position normalized (the dome is centered on
/// the origin). The result is how far the strut leans off the hub's tangent
/// plane.
///
/// # Errors
///
/// Returns an error if the start vertex is at the origin or the edge has
/// zero length.
pub fn strut_angle(graph: &EdgeGraph, edge: &Edge) -> Result<f64> {
    let start = graph.vertex(edge.start())?.position;
    let end = graph.vertex(edge.end())?.position;

    let normal = start.coords.try_normalize(TOLERANCE).ok_or_else(|| {
        GeometryError::Degenerate(format!("vertex {} coincides with the origin", edge.start()))
    })?;
    let direction = (end - start).try_normalize(TOLERANCE).ok_or_else(|| {
        GeometryError::Degenerate(format!(
            "strut {}-{} has zero length",
            edge.start(),
            edge.end()
        ))
    })?;

    let angle = normal.dot(&direction).clamp(-1.0, 1.0).acos().to_degrees();
    Ok(round_to((angle - 90.0).abs(), ANGLE_DECIMALS))
}

/// Spreadsheet-style label for the `index`-th type: A..Z, AA..AZ, BA, ..
#[must_use]
pub fn strut_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let rem = ((n - 1) % 26) as u8;
        label.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    label.iter().rev().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::graph::{BuildEdgeGraph, SliceFilter};
    use crate::operations::shaping::Project;
    use crate::polyhedron::{LatticeSubdivision, PlatonicSolid, Subdivide};
    use approx::assert_relative_eq;

    fn graph(level: u32, to_sphere: bool, slice: f64) -> EdgeGraph {
        let mesh = LatticeSubdivision
            .subdivide(&PlatonicSolid::Icosahedron.dome_base(), level)
            .unwrap();
        let points = Project::new(level, 1.0, to_sphere)
            .execute(&mesh.vertices)
            .unwrap();
        let mask = SliceFilter::new(slice, 1.0).execute(&points);
        BuildEdgeGraph::new(&points, &mesh.faces, &mask)
            .execute()
            .unwrap()
    }

    #[test]
    fn labels_run_past_z() {
        assert_eq!(strut_label(0), "A");
        assert_eq!(strut_label(8), "I");
        assert_eq!(strut_label(25), "Z");
        assert_eq!(strut_label(26), "AA");
        assert_eq!(strut_label(27), "AB");
        assert_eq!(strut_label(52), "BA");
    }

    #[test]
    fn icosahedron_has_one_type() {
        let g = graph(1, false, -1.0);
        let table = ClassifyStruts::new(1.0).execute(&g).unwrap();
        assert_eq!(table.types.len(), 1);
        let a = &table.types[0];
        assert_eq!(a.label, "A");
        assert_eq!(a.count, 30);
        assert_relative_eq!(a.length, 1.05146);
        assert_relative_eq!(a.chord_factor, 1.05146);
        // half the central angle of an edge: asin(l / 2r)
        assert_relative_eq!(a.angle.unwrap(), 31.72, epsilon = 1e-9);
    }

    #[test]
    fn projected_level_two_has_two_types_in_length_order() {
        let g = graph(2, true, -1.0);
        let table = ClassifyStruts::new(1.0).execute(&g).unwrap();
        let summary: Vec<(&str, f64, usize)> = table
            .types
            .iter()
            .map(|t| (t.label.as_str(), t.length, t.count))
            .collect();
        assert_eq!(summary, vec![("A", 0.54653, 60), ("B", 0.61803, 60)]);
    }

    #[test]
    fn flat_level_two_keeps_one_type() {
        let g = graph(2, false, -1.0);
        let table = ClassifyStruts::new(1.0).execute(&g).unwrap();
        assert_eq!(table.types.len(), 1);
    }

    #[test]
    fn every_edge_gets_a_type() {
        let g = graph(3, true, 0.2);
        let table = ClassifyStruts::new(1.0).execute(&g).unwrap();
        assert_eq!(table.edge_types.len(), g.edges().len());
        for (i, edge) in g.edges().iter().enumerate() {
            let (_, ty) = table.type_of(EdgeId::from_usize(i)).unwrap();
            assert!((ty.length - edge.length).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn labels_survive_the_slice() {
        let whole = ClassifyStruts::new(1.0).execute(&graph(3, true, -1.0)).unwrap();
        let cut = ClassifyStruts::new(1.0).execute(&graph(3, true, 0.3)).unwrap();
        assert_eq!(whole.edge_types, cut.edge_types);
        let retained: usize = cut.types.iter().map(|t| t.count).sum();
        assert!(retained < 270);
    }

    #[test]
    fn fully_sliced_types_have_no_angle() {
        let g = graph(2, true, 1.0);
        let table = ClassifyStruts::new(1.0).execute(&g).unwrap();
        assert!(table.types.iter().all(|t| t.count == 0 && t.angle.is_none()));
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(StrutTypeId(1).hex_color(), EDGE_PALETTE[1]);
        assert_eq!(StrutTypeId(9).hex_color(), EDGE_PALETTE[0]);
    }
}
