pub mod classify;
pub mod graph;
pub mod shaping;
