mod offset_for_print;
mod project;

pub use offset_for_print::OffsetForPrint;
pub use project::{Project, FLAT_LATTICE_SCALE};
