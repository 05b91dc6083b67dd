use std::fmt;

use crate::operations::classify::StrutType;

/// Counts and per-type rows of a built dome.
#[derive(Debug, Clone, PartialEq)]
pub struct DomeReport {
    /// Retained vertices.
    pub hubs: usize,
    /// Retained edges.
    pub struts: usize,
    /// Retained faces.
    pub faces: usize,
    /// Strut types in ascending length order.
    pub strut_types: Vec<StrutType>,
}

impl fmt::Display for DomeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hubs: {}", self.hubs)?;
        writeln!(f, "struts: {}", self.struts)?;
        for ty in &self.strut_types {
            write!(f, "|{}| x {} | length {:.5}", ty.label, ty.count, ty.length)?;
            match ty.angle {
                Some(angle) => writeln!(f, " | angle {angle:.2}°")?,
                None => writeln!(f, " | angle -")?,
            }
        }
        write!(f, "faces: {}", self.faces)
    }
}
