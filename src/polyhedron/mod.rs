mod platonic;
mod subdivide;

pub use platonic::PlatonicSolid;
pub use subdivide::{LatticeSubdivision, Subdivide};

use crate::error::{GeometryError, OperationError, Result, TopologyError};
use crate::math::{Point3, Rotation3};

/// A triangulated base solid: vertex positions plus index triples.
///
/// This is the input handed to a [`Subdivide`] provider. Faces are
/// triangles referencing `vertices` by position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePolyhedron {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a face).
    pub faces: Vec<[u32; 3]>,
}

impl BasePolyhedron {
    /// Creates a base polyhedron, validating the face indices.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite, the face list is
    /// empty, a face index is out of range, or a face references the same
    /// vertex twice.
    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Result<Self> {
        let poly = Self { vertices, faces };
        poly.validate()?;
        Ok(poly)
    }

    /// Builds a base polyhedron from flat coordinate and index arrays,
    /// `[x, y, z, x, y, z, ..]` and `[i, j, k, i, j, k, ..]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either array length is not a multiple of 3, or
    /// if the resulting mesh fails [`BasePolyhedron::new`] validation.
    pub fn from_flat(vertices: &[f64], face_indices: &[u32]) -> Result<Self> {
        if vertices.len() % 3 != 0 {
            return Err(OperationError::InvalidInput(format!(
                "vertex array length {} is not a multiple of 3",
                vertices.len()
            ))
            .into());
        }
        if face_indices.len() % 3 != 0 {
            return Err(OperationError::InvalidInput(format!(
                "face index array length {} is not a multiple of 3",
                face_indices.len()
            ))
            .into());
        }

        let points = vertices
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = face_indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(points, faces)
    }

    /// Returns a copy with every vertex rotated about the origin.
    #[must_use]
    pub fn rotated(&self, rotation: &Rotation3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| rotation * v).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Checks the mesh invariants enforced by [`BasePolyhedron::new`].
    ///
    /// Providers call this before indexing into the vertex list.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`BasePolyhedron::new`].
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self
            .vertices
            .iter()
            .position(|v| !v.coords.iter().all(|c| c.is_finite()))
        {
            return Err(
                GeometryError::Degenerate(format!("vertex {i} has a non-finite coordinate")).into(),
            );
        }
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("face list is empty".into()).into());
        }
        let len = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            for &index in tri {
                let index = index as usize;
                if index >= len {
                    return Err(TopologyError::IndexOutOfRange { index, len }.into());
                }
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[2] == tri[0] {
                return Err(TopologyError::DegenerateFace { face }.into());
            }
        }
        Ok(())
    }
}

/// A refined mesh returned by a subdivision provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefinedMesh {
    /// Vertex positions, indexed by their stable vertex index.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a face).
    pub faces: Vec<[u32; 3]>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeodomeError;

    #[test]
    fn flat_arrays_round_into_points_and_faces() {
        let poly = BasePolyhedron::from_flat(
            &[1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0],
            &[2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1],
        )
        .unwrap();
        assert_eq!(poly.vertices.len(), 4);
        assert_eq!(poly.faces.len(), 4);
        assert_eq!(poly.vertices[1], Point3::new(-1.0, -1.0, 1.0));
        assert_eq!(poly.faces[3], [2, 3, 1]);
    }

    #[test]
    fn ragged_vertex_array_fails() {
        let result = BasePolyhedron::from_flat(&[1.0, 0.0], &[0, 1, 2]);
        assert!(matches!(result, Err(GeodomeError::Operation(_))));
    }

    #[test]
    fn empty_face_list_fails() {
        let result = BasePolyhedron::from_flat(&[1.0, 0.0, 0.0], &[]);
        assert!(matches!(result, Err(GeodomeError::Operation(_))));
    }

    #[test]
    fn out_of_range_index_fails() {
        let result = BasePolyhedron::from_flat(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0], &[0, 1, 5]);
        assert!(matches!(
            result,
            Err(GeodomeError::Topology(TopologyError::IndexOutOfRange {
                index: 5,
                len: 2
            }))
        ));
    }

    #[test]
    fn non_finite_coordinate_fails() {
        let mut flat: Vec<f64> = PlatonicSolid::Icosahedron
            .dome_base()
            .vertices
            .iter()
            .flat_map(|v| [v.x, v.y, v.z])
            .collect();
        let faces: Vec<u32> = PlatonicSolid::Icosahedron
            .dome_base()
            .faces
            .iter()
            .flatten()
            .copied()
            .collect();

        flat[4] = f64::NAN;
        let result = BasePolyhedron::from_flat(&flat, &faces);
        assert!(matches!(result, Err(GeodomeError::Geometry(GeometryError::Degenerate(_)))));

        flat[4] = f64::INFINITY;
        assert!(BasePolyhedron::from_flat(&flat, &faces).is_err());
    }

    #[test]
    fn repeated_index_in_face_fails() {
        let result = BasePolyhedron::new(
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            vec![[0, 1, 1]],
        );
        assert!(matches!(
            result,
            Err(GeodomeError::Topology(TopologyError::DegenerateFace { face: 0 }))
        ));
    }

    #[test]
    fn rotation_preserves_faces() {
        let base = PlatonicSolid::Octahedron.base();
        let rotated = base.rotated(&Rotation3::from_axis_angle(
            &nalgebra::Vector3::z_axis(),
            std::f64::consts::FRAC_PI_2,
        ));
        assert_eq!(rotated.faces, base.faces);
        assert!((rotated.vertices[0] - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }
}
