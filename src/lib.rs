//! route-planner core
//!
//! Turns a routing-service response into a display-ready route model, plus
//! the collaborator adapters and presentation layers around it.

pub mod traits;
pub mod polyline;
pub mod format;
pub mod normalize;
pub mod ors;
pub mod planner;
pub mod render;
