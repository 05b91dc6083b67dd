use thiserror::Error;

/// Top-level error type for the geodome pipeline.
#[derive(Debug, Error)]
pub enum GeodomeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the vertex/edge/face graph.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("index {index} is out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("face {face} references the same vertex more than once")]
    DegenerateFace { face: usize },

    #[error(
        "non-manifold mesh: {edges} edges for {faces} faces, {offending} edges not shared by exactly two faces"
    )]
    NonManifold {
        edges: usize,
        faces: usize,
        offending: usize,
    },
}

/// Errors related to pipeline inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GeodomeError`].
pub type Result<T> = std::result::Result<T, GeodomeError>;
