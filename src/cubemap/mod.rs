//! Cubemap faces, pixel buffers, and direction sampling.
//!
//! A [`Cubemap`] maps each of the six [`Face`] directions to a [`FaceImage`];
//! [`sample_cubemap`] resolves an arbitrary viewing direction to a face and
//! returns the nearest source pixel's color.

mod buffer;
mod face;
mod sampler;

pub use buffer::{Cubemap, FaceImage, FaceImageError};
pub use face::Face;
pub use sampler::{direction_to_face_uv, sample_cubemap, SampleError};
