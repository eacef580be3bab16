//! Cubemap to equirectangular panorama conversion.
//!
//! This crate resamples the six faces of a skybox cubemap (right, left, top,
//! bottom, front, back) into a single equirectangular (latitude/longitude)
//! panorama. For every output pixel the projector computes a viewing
//! direction on the unit sphere; the sampler picks the face that direction
//! intersects and returns the nearest source pixel's color.

pub mod cubemap;
pub mod export;
pub mod loader;
pub mod projection;

pub use cubemap::{sample_cubemap, Cubemap, Face, FaceImage, FaceImageError, SampleError};
pub use export::{export_panorama_png, PngExportError, PngExportOptions};
pub use loader::{load_cubemap_dir, LoadError};
pub use projection::{project_equirect, Panorama, ProjectionError};
