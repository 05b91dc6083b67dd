pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod polyhedron;
pub mod topology;

pub use error::{GeodomeError, Result};
pub use model::{BuildDome, DomeModel, DomeParams, DomeStore, ParamChange};
pub use polyhedron::{BasePolyhedron, PlatonicSolid};
