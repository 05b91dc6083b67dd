use crate::topology::EdgeGraph;

/// Spreads the dome outward into a flatter, printable layout.
///
/// Each vertex moves horizontally by its own `(x, z)` scaled by
/// `radius - |y|`, so the equator opens up most and the poles stay put.
/// Cached edge lengths are left untouched.
pub struct OffsetForPrint {
    radius: f64,
}

impl OffsetForPrint {
    /// Creates a new `OffsetForPrint` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the offset, moving every vertex in place.
    pub fn execute(&self, graph: &mut EdgeGraph) {
        for vertex in &mut graph.vertices {
            let p = &mut vertex.position;
            let offset = self.radius - p.y.abs();
            p.x += p.x * offset;
            p.z += p.z * offset;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::graph::BuildEdgeGraph;
    use approx::assert_relative_eq;

    fn triangle_pair() -> EdgeGraph {
        // two triangles glued back to back: a closed (degenerate) surface
        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        BuildEdgeGraph::new(&points, &[[0, 1, 2], [0, 2, 1]], &[false; 3])
            .execute()
            .unwrap()
    }

    #[test]
    fn equator_moves_poles_stay() {
        let mut graph = triangle_pair();
        OffsetForPrint::new(1.0).execute(&mut graph);
        let v = graph.vertices();
        assert_relative_eq!(v[0].position, Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(v[1].position, Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(v[2].position, Point3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn lengths_are_not_remeasured() {
        let mut graph = triangle_pair();
        let before: Vec<f64> = graph.edges().iter().map(|e| e.length).collect();
        OffsetForPrint::new(1.0).execute(&mut graph);
        let after: Vec<f64> = graph.edges().iter().map(|e| e.length).collect();
        assert_eq!(before, after);
    }
}
