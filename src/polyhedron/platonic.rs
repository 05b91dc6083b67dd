use crate::math::{Point3, Rotation3, Vector3};

use super::BasePolyhedron;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Built-in base solids, triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlatonicSolid {
    Tetrahedron,
    Octahedron,
    #[default]
    Icosahedron,
    /// Cube, each square split into two triangles.
    Hexahedron,
    /// Each pentagon split into three triangles.
    Dodecahedron,
}

impl PlatonicSolid {
    /// All built-in solids.
    pub const ALL: [Self; 5] = [
        Self::Tetrahedron,
        Self::Octahedron,
        Self::Icosahedron,
        Self::Hexahedron,
        Self::Dodecahedron,
    ];

    /// Returns the solid in its table orientation.
    #[must_use]
    pub fn base(self) -> BasePolyhedron {
        match self {
            Self::Tetrahedron => from_tables(
                &[1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0],
                &[2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1],
            ),
            Self::Octahedron => from_tables(
                &[
                    1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0,
                    0.0, 0.0, -1.0,
                ],
                &[
                    0, 2, 4, 0, 4, 3, 0, 3, 5, 0, 5, 2, 1, 2, 5, 1, 5, 3, 1, 3, 4, 1, 4, 2,
                ],
            ),
            Self::Icosahedron => {
                let t = PHI;
                from_tables(
                    &[
                        -1.0, t, 0.0, 1.0, t, 0.0, -1.0, -t, 0.0, 1.0, -t, 0.0, //
                        0.0, -1.0, t, 0.0, 1.0, t, 0.0, -1.0, -t, 0.0, 1.0, -t, //
                        t, 0.0, -1.0, t, 0.0, 1.0, -t, 0.0, -1.0, -t, 0.0, 1.0,
                    ],
                    &[
                        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
                        1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
                        3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
                        4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
                    ],
                )
            }
            Self::Hexahedron => from_tables(
                &[
                    -1.0, -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0, //
                    -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
                ],
                &[
                    0, 3, 2, 0, 2, 1, 4, 5, 6, 4, 6, 7, 0, 1, 5, 0, 5, 4, //
                    3, 7, 6, 3, 6, 2, 0, 4, 7, 0, 7, 3, 1, 2, 6, 1, 6, 5,
                ],
            ),
            Self::Dodecahedron => {
                let t = PHI;
                let r = 1.0 / PHI;
                from_tables(
                    &[
                        // (±1, ±1, ±1)
                        -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, //
                        1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0,
                        // (0, ±1/φ, ±φ)
                        0.0, -r, -t, 0.0, -r, t, 0.0, r, -t, 0.0, r, t,
                        // (±1/φ, ±φ, 0)
                        -r, -t, 0.0, -r, t, 0.0, r, -t, 0.0, r, t, 0.0,
                        // (±φ, 0, ±1/φ)
                        -t, 0.0, -r, t, 0.0, -r, -t, 0.0, r, t, 0.0, r,
                    ],
                    &[
                        3, 11, 7, 3, 7, 15, 3, 15, 13, 7, 19, 17, 7, 17, 6, 7, 6, 15, //
                        17, 4, 8, 17, 8, 10, 17, 10, 6, 8, 0, 16, 8, 16, 2, 8, 2, 10, //
                        0, 12, 1, 0, 1, 18, 0, 18, 16, 6, 10, 2, 6, 2, 13, 6, 13, 15, //
                        2, 16, 18, 2, 18, 3, 2, 3, 13, 18, 1, 9, 18, 9, 11, 18, 11, 3, //
                        4, 14, 12, 4, 12, 0, 4, 0, 8, 11, 9, 5, 11, 5, 19, 11, 19, 7, //
                        19, 5, 14, 19, 14, 4, 19, 4, 17, 1, 12, 14, 1, 14, 5, 1, 5, 9,
                    ],
                )
            }
        }
    }

    /// Rotation that stands the solid up as a dome.
    ///
    /// The icosahedron is turned about Z so that one vertex lands on +Y and
    /// its antipode on -Y; the other solids keep their table orientation.
    #[must_use]
    pub fn dome_orientation(self) -> Rotation3 {
        match self {
            Self::Icosahedron => Rotation3::from_axis_angle(
                &Vector3::z_axis(),
                std::f64::consts::FRAC_PI_2 + PHI.atan(),
            ),
            _ => Rotation3::identity(),
        }
    }

    /// Returns the solid rotated by [`PlatonicSolid::dome_orientation`].
    #[must_use]
    pub fn dome_base(self) -> BasePolyhedron {
        self.base().rotated(&self.dome_orientation())
    }
}

fn from_tables(coords: &[f64], indices: &[u32]) -> BasePolyhedron {
    BasePolyhedron {
        vertices: coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect(),
        faces: indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        let sizes: Vec<(usize, usize)> = PlatonicSolid::ALL
            .iter()
            .map(|s| {
                let b = s.base();
                (b.vertices.len(), b.faces.len())
            })
            .collect();
        assert_eq!(sizes, vec![(4, 4), (6, 8), (12, 20), (8, 12), (20, 36)]);
    }

    #[test]
    fn tables_pass_validation() {
        for solid in PlatonicSolid::ALL {
            let b = solid.base();
            assert!(BasePolyhedron::new(b.vertices, b.faces).is_ok(), "{solid:?}");
        }
    }

    #[test]
    fn icosahedron_vertices_share_one_radius() {
        let base = PlatonicSolid::Icosahedron.base();
        let r0 = base.vertices[0].coords.norm();
        for v in &base.vertices {
            assert!((v.coords.norm() - r0).abs() < 1e-12);
        }
    }

    #[test]
    fn icosahedron_dome_orientation_puts_a_vertex_on_top() {
        let base = PlatonicSolid::Icosahedron.dome_base();
        let r = base.vertices[0].coords.norm();
        let top = base.vertices.iter().map(|v| v.y).fold(f64::MIN, f64::max);
        let bottom = base.vertices.iter().map(|v| v.y).fold(f64::MAX, f64::min);
        assert!((top - r).abs() < 1e-9);
        assert!((bottom + r).abs() < 1e-9);
        // vertex 3 = (1, -φ, 0) is the one that ends up on the axis
        assert!(base.vertices[3].x.abs() < 1e-9);
        assert!(base.vertices[3].z.abs() < 1e-9);
    }
}
