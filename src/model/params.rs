use crate::error::{GeometryError, OperationError, Result};
use crate::math::convert_to_range;

/// Parameters controlling a dome build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeParams {
    /// Dome radius.
    pub radius: f64,
    /// Subdivision level; 1 keeps the base solid.
    pub level: u32,
    /// Push the subdivided lattice onto the sphere.
    pub project_to_sphere: bool,
    /// Height of the horizontal cut; at or below `-radius` nothing is cut.
    pub slice_height: f64,
    /// Spread the vertices into a flatter, printable layout.
    pub offset_for_print: bool,
}

impl Default for DomeParams {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DomeParams {
    /// Creates uncut, sphere-projected, level 1 parameters for `radius`.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            level: 1,
            project_to_sphere: true,
            slice_height: -radius,
            offset_for_print: false,
        }
    }

    /// Sets the subdivision level.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Sets sphere projection.
    #[must_use]
    pub fn with_projection(mut self, project_to_sphere: bool) -> Self {
        self.project_to_sphere = project_to_sphere;
        self
    }

    /// Sets the cut height directly.
    #[must_use]
    pub fn with_slice_height(mut self, height: f64) -> Self {
        self.slice_height = height;
        self
    }

    /// Sets the cut height from a slider value in `[0, 1]`, mapped linearly
    /// onto `[-radius, radius]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fraction` lies outside `[0, 1]`.
    pub fn with_slice_fraction(mut self, fraction: f64) -> Result<Self> {
        self.slice_height = convert_to_range(fraction, (0.0, 1.0), (-self.radius, self.radius))
            .ok_or(GeometryError::ParameterOutOfRange {
                parameter: "slice fraction",
                value: fraction,
                min: 0.0,
                max: 1.0,
            })?;
        Ok(self)
    }

    /// Sets the print layout flag.
    #[must_use]
    pub fn with_offset_for_print(mut self, offset: bool) -> Self {
        self.offset_for_print = offset;
        self
    }

    /// Checks that the parameters describe a buildable dome.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number, the
    /// level is zero, or the slice height is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        if self.level == 0 {
            return Err(
                OperationError::InvalidInput("subdivision level must be at least 1".into()).into(),
            );
        }
        if !self.slice_height.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "slice height must be finite, got {}",
                self.slice_height
            ))
            .into());
        }
        Ok(())
    }
}
