mod faces;
mod hubs;
mod struts;

pub use faces::ClassifyFaces;
pub use hubs::{ClassifyHubs, Hub, HubCategory};
pub use struts::{
    strut_angle, strut_label, ClassifyStruts, StrutTable, StrutType, StrutTypeId, EDGE_PALETTE,
};
