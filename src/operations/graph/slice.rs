use crate::math::Point3;

/// Marks vertices at or below a horizontal cut as deleted.
///
/// The cut height is measured along +Y from the dome center. A height at or
/// below `-radius` is the uncut sphere; `+radius` removes everything up to
/// and including the top. Deletion is soft: callers carry the mask forward
/// and derive edge and face deletion from it.
pub struct SliceFilter {
    height: f64,
    radius: f64,
}

impl SliceFilter {
    /// Creates a new `SliceFilter`.
    #[must_use]
    pub fn new(height: f64, radius: f64) -> Self {
        Self { height, radius }
    }

    /// Returns `true` if the filter removes anything at all.
    #[must_use]
    pub fn cuts(&self) -> bool {
        self.height > -self.radius
    }

    /// Returns `true` if a vertex at `point` is removed by the cut.
    #[must_use]
    pub fn is_deleted(&self, point: &Point3) -> bool {
        self.cuts() && point.y <= self.height
    }

    /// Executes the filter, returning the deletion mask in index order.
    #[must_use]
    pub fn execute(&self, points: &[Point3]) -> Vec<bool> {
        let mask: Vec<bool> = points.iter().map(|p| self.is_deleted(p)).collect();
        tracing::debug!(
            height = self.height,
            deleted = mask.iter().filter(|&&d| d).count(),
            total = points.len(),
            "applied slice"
        );
        mask
    }
}
