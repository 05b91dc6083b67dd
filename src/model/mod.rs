//! Dome parameters, the build pipeline, and the assembled model.

mod build;
mod dome;
mod params;
mod report;
mod store;

pub use build::BuildDome;
pub use dome::{ClassifiedEdge, DomeModel};
pub use params::DomeParams;
pub use report::DomeReport;
pub use store::{DomeId, DomeStore, ParamChange};
