//! Nearest-neighbor cubemap sampling by dominant-axis projection.

use glam::Vec3;
use thiserror::Error;

use super::buffer::{Cubemap, FaceImage};
use super::face::Face;

/// Errors that can occur while sampling a cubemap.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("No image loaded for face '{0}'")]
    MissingFace(Face),
    #[error("Direction has no dominant axis (zero vector)")]
    DegenerateDirection,
}

/// Resolves a direction to the cube face it intersects, with face-local UV.
///
/// The face is chosen by the dominant axis of the direction; the remaining
/// two components are divided by the dominant component's magnitude, giving
/// UV in [-1, 1]. Ties between axes resolve with X > Y > Z precedence, which
/// pins boundary directions such as (1, 1, 0) to the X faces. The direction
/// need not be normalized.
pub fn direction_to_face_uv(direction: Vec3) -> Result<(Face, f32, f32), SampleError> {
    let abs = direction.abs();

    if abs.x == 0.0 && abs.y == 0.0 && abs.z == 0.0 {
        return Err(SampleError::DegenerateDirection);
    }

    let (face, u, v) = if abs.x >= abs.y && abs.x >= abs.z {
        if direction.x > 0.0 {
            (Face::Right, -direction.z / abs.x, direction.y / abs.x)
        } else {
            (Face::Left, direction.z / abs.x, direction.y / abs.x)
        }
    } else if abs.y >= abs.x && abs.y >= abs.z {
        if direction.y > 0.0 {
            (Face::Top, direction.x / abs.y, -direction.z / abs.y)
        } else {
            (Face::Bottom, direction.x / abs.y, direction.z / abs.y)
        }
    } else if direction.z > 0.0 {
        (Face::Front, direction.x / abs.z, direction.y / abs.z)
    } else {
        (Face::Back, -direction.x / abs.z, direction.y / abs.z)
    };

    Ok((face, u, v))
}

/// Converts face-local UV in [-1, 1] to a pixel coordinate on the face.
///
/// Indices truncate toward zero (nearest-neighbor with flooring) and clamp to
/// the face bounds; the row is flipped so that v = +1 maps to the top row.
fn uv_to_pixel(u: f32, v: f32, image: &FaceImage) -> (u32, u32) {
    let w = image.width();
    let h = image.height();
    let px = (((u * 0.5 + 0.5) * (w - 1) as f32) as u32).min(w - 1);
    let py = (((v * 0.5 + 0.5) * (h - 1) as f32) as u32).min(h - 1);
    (px, h - py - 1)
}

/// Samples the cubemap color in the given direction.
///
/// # Arguments
/// * `cubemap` - The six-face cubemap to sample
/// * `direction` - Viewing direction; need not be normalized
///
/// # Returns
/// The color of the nearest pixel on the face the direction intersects, or
/// [`SampleError::MissingFace`] if that face has no image, or
/// [`SampleError::DegenerateDirection`] for the zero vector.
pub fn sample_cubemap(cubemap: &Cubemap, direction: Vec3) -> Result<[u8; 3], SampleError> {
    let (face, u, v) = direction_to_face_uv(direction)?;
    let image = cubemap.face(face).ok_or(SampleError::MissingFace(face))?;
    let (px, py) = uv_to_pixel(u, v, image);
    Ok(image.pixel(px, py))
}
