mod build_edges;
mod slice;

pub use build_edges::BuildEdgeGraph;
pub use slice::SliceFilter;
