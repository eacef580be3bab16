//! Equirectangular projection of cubemaps.
//!
//! The projector walks every pixel of the target panorama, converts it to a
//! viewing direction on the unit sphere, and delegates to the cubemap
//! sampler. Rows are distributed across worker threads.

mod equirect;
mod panorama;

pub use equirect::{project_equirect, ProjectionError};
pub use panorama::Panorama;
