use std::collections::HashMap;

use crate::error::{OperationError, Result, TopologyError};
use crate::math::Point3;

use super::{BasePolyhedron, RefinedMesh};

/// A provider that refines a base polyhedron for a given subdivision level.
///
/// Implementations must be pure: identical inputs yield identical meshes,
/// with every vertex index stable across calls.
pub trait Subdivide {
    /// Refines `base` at `level` (1 = unrefined).
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is zero or the provider cannot refine
    /// the input.
    fn subdivide(&self, base: &BasePolyhedron, level: u32) -> Result<RefinedMesh>;
}

/// Splits each base face into a flat triangular lattice.
///
/// At level `n` every base edge is cut into `n` equal segments and every face
/// into `n²` triangles lying in the plane of the original face. Points on
/// shared base edges are emitted once, so the refined mesh stays closed.
/// Base vertices keep their original indices; lattice points follow in the
/// order they are first reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeSubdivision;

/// Barycentric lattice coordinate: `(base vertex, weight)` pairs with
/// non-zero weight, sorted by base vertex.
type LatticeKey = Vec<(u32, u32)>;

impl Subdivide for LatticeSubdivision {
    fn subdivide(&self, base: &BasePolyhedron, level: u32) -> Result<RefinedMesh> {
        if level == 0 {
            return Err(
                OperationError::InvalidInput("subdivision level must be at least 1".into()).into(),
            );
        }
        base.validate()?;

        let mut lattice = Lattice {
            base,
            level,
            vertices: Vec::with_capacity(base.vertices.len()),
            lookup: HashMap::new(),
        };
        for b in 0..base.vertices.len() {
            #[allow(clippy::cast_possible_truncation)]
            let b = b as u32;
            lattice.point(&[(b, level)])?;
        }

        let n = level as usize;
        let mut faces = Vec::with_capacity(base.faces.len() * n * n);
        for &[a, b, c] in &base.faces {
            // grid[i][j]: i steps toward c, j steps toward b
            let mut grid: Vec<Vec<u32>> = Vec::with_capacity(n + 1);
            for i in 0..=level {
                let row = (0..=level - i)
                    .map(|j| lattice.point(&[(a, level - i - j), (b, j), (c, i)]))
                    .collect::<Result<Vec<u32>>>()?;
                grid.push(row);
            }

            for i in 0..n {
                for j in 0..n - i {
                    faces.push([grid[i][j], grid[i][j + 1], grid[i + 1][j]]);
                    if j + 1 < n - i {
                        faces.push([grid[i][j + 1], grid[i + 1][j + 1], grid[i + 1][j]]);
                    }
                }
            }
        }

        Ok(RefinedMesh {
            vertices: lattice.vertices,
            faces,
        })
    }
}

struct Lattice<'a> {
    base: &'a BasePolyhedron,
    level: u32,
    vertices: Vec<Point3>,
    lookup: HashMap<LatticeKey, u32>,
}

impl Lattice<'_> {
    /// Returns the index of the lattice point with the given weights,
    /// creating it on first use.
    fn point(&mut self, weights: &[(u32, u32)]) -> Result<u32> {
        let mut key: LatticeKey = weights.iter().copied().filter(|&(_, w)| w > 0).collect();
        key.sort_unstable();

        if let Some(&index) = self.lookup.get(&key) {
            return Ok(index);
        }

        // Summing in key order keeps shared points bit-identical across faces.
        let n = f64::from(self.level);
        let mut coords = nalgebra::Vector3::zeros();
        let len = self.base.vertices.len();
        for &(b, w) in &key {
            let base = self
                .base
                .vertices
                .get(b as usize)
                .ok_or(TopologyError::IndexOutOfRange {
                    index: b as usize,
                    len,
                })?;
            coords += base.coords * (f64::from(w) / n);
        }

        #[allow(clippy::cast_possible_truncation)]
        let index = self.vertices.len() as u32;
        self.vertices.push(Point3::from(coords));
        self.lookup.insert(key, index);
        Ok(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeodomeError;
    use crate::polyhedron::PlatonicSolid;

    fn refine(solid: PlatonicSolid, level: u32) -> RefinedMesh {
        LatticeSubdivision.subdivide(&solid.base(), level).unwrap()
    }

    #[test]
    fn level_one_is_the_base_mesh() {
        let base = PlatonicSolid::Icosahedron.base();
        let mesh = LatticeSubdivision.subdivide(&base, 1).unwrap();
        assert_eq!(mesh.vertices, base.vertices);
        assert_eq!(mesh.faces, base.faces);
    }

    #[test]
    fn icosahedron_level_counts() {
        // V = 10n² + 2, F = 20n²
        for (level, v, f) in [(2, 42, 80), (3, 92, 180), (4, 162, 320)] {
            let mesh = refine(PlatonicSolid::Icosahedron, level);
            assert_eq!(mesh.vertices.len(), v, "level {level}");
            assert_eq!(mesh.faces.len(), f, "level {level}");
        }
    }

    #[test]
    fn base_vertices_keep_their_indices() {
        let base = PlatonicSolid::Octahedron.base();
        let mesh = LatticeSubdivision.subdivide(&base, 3).unwrap();
        assert_eq!(&mesh.vertices[..base.vertices.len()], &base.vertices[..]);
    }

    #[test]
    fn lattice_stays_in_the_face_plane() {
        let base = PlatonicSolid::Tetrahedron.base();
        let mesh = LatticeSubdivision.subdivide(&base, 2).unwrap();
        // midpoint of edge (1, 0) of the tetrahedron
        let mid = nalgebra::center(&base.vertices[0], &base.vertices[1]);
        assert!(mesh.vertices.iter().any(|v| (v - mid).norm() < 1e-12));
        // lattice points sit inside the base, not on its circumsphere
        let r = base.vertices[0].coords.norm();
        assert!(mesh.vertices.iter().any(|v| v.coords.norm() < r - 1e-3));
    }

    #[test]
    fn refinement_is_deterministic() {
        let a = refine(PlatonicSolid::Dodecahedron, 3);
        let b = refine(PlatonicSolid::Dodecahedron, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn level_zero_fails() {
        let result = LatticeSubdivision.subdivide(&PlatonicSolid::Icosahedron.base(), 0);
        assert!(result.is_err());
    }

    #[test]
    fn hand_built_base_with_bad_index_fails() {
        let base = BasePolyhedron {
            vertices: PlatonicSolid::Tetrahedron.base().vertices,
            faces: vec![[0, 1, 9]],
        };
        let result = LatticeSubdivision.subdivide(&base, 2);
        assert!(matches!(
            result,
            Err(GeodomeError::Topology(TopologyError::IndexOutOfRange {
                index: 9,
                len: 4
            }))
        ));
    }
}
