use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

/// Scale applied to an unprojected lattice so the flat faceted shell ends up
/// roughly at the requested radius.
pub const FLAT_LATTICE_SCALE: f64 = 0.525;

/// Maps refined vertex positions onto the sphere or the flat lattice.
///
/// At level 1 the vertices already are the base solid's corners, so they are
/// always pushed onto the sphere. Above level 1 they are either projected
/// (`to_sphere`) or scaled by `radius * FLAT_LATTICE_SCALE`, which keeps the
/// subdivided faces flat.
pub struct Project {
    level: u32,
    radius: f64,
    to_sphere: bool,
}

impl Project {
    /// Creates a new `Project` operation.
    #[must_use]
    pub fn new(level: u32, radius: f64, to_sphere: bool) -> Self {
        Self {
            level,
            radius,
            to_sphere,
        }
    }

    /// Executes the projection, returning the new positions in index order.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is not finite, or if a vertex that must
    /// be normalized sits at the origin.
    pub fn execute(&self, points: &[Point3]) -> Result<Vec<Point3>> {
        let scale = self.radius * FLAT_LATTICE_SCALE;
        let flat = self.level > 1 && !self.to_sphere;

        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let norm = p.coords.norm();
                if !norm.is_finite() {
                    return Err(GeometryError::Degenerate(format!(
                        "vertex {i} has a non-finite coordinate"
                    ))
                    .into());
                }
                if flat {
                    return Ok(Point3::from(p.coords * scale));
                }
                if norm <= TOLERANCE {
                    return Err(GeometryError::Degenerate(format!(
                        "vertex {i} coincides with the origin"
                    ))
                    .into());
                }
                Ok(Point3::from(p.coords / norm * self.radius))
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts() -> Vec<Point3> {
        vec![Point3::new(2.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)]
    }

    #[test]
    fn level_one_always_projects() {
        let out = Project::new(1, 3.0, false).execute(&pts()).unwrap();
        for p in &out {
            assert_relative_eq!(p.coords.norm(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sphere_projection_normalizes() {
        let out = Project::new(3, 2.0, true).execute(&pts()).unwrap();
        assert_relative_eq!(out[0], Point3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out[1].coords.norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_lattice_is_scaled_not_normalized() {
        let out = Project::new(2, 2.0, false).execute(&pts()).unwrap();
        assert_relative_eq!(out[0].x, 2.0 * 2.0 * FLAT_LATTICE_SCALE, epsilon = 1e-12);
        assert_relative_eq!(out[1].x, 2.0 * FLAT_LATTICE_SCALE, epsilon = 1e-12);
        assert_relative_eq!(out[1].y, 2.0 * FLAT_LATTICE_SCALE, epsilon = 1e-12);
    }

    #[test]
    fn projection_is_idempotent() {
        let op = Project::new(4, 1.5, true);
        let once = op.execute(&pts()).unwrap();
        let twice = op.execute(&once).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn origin_vertex_fails() {
        let result = Project::new(1, 1.0, true).execute(&[Point3::origin()]);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_vertex_fails_in_both_modes() {
        let points = [Point3::new(1.0, f64::NAN, 0.0)];
        assert!(Project::new(1, 1.0, true).execute(&points).is_err());
        assert!(Project::new(2, 1.0, false).execute(&points).is_err());
    }
}
