//! Equirectangular (lat/lon) projection of a cubemap.

use std::f32::consts::PI;

use glam::Vec3;
use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use super::panorama::Panorama;
use crate::cubemap::{sample_cubemap, Cubemap, SampleError};

/// Errors that can occur during projection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Invalid panorama dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Computes the viewing direction for an output pixel.
///
/// `theta` sweeps 0..pi (top pole to bottom pole) as `y` grows; `phi` sweeps
/// a full turn of longitude as `x` grows, with `phi = 0` pointing toward +Z
/// (the front face). Y is the polar axis, so the top row of the panorama
/// samples the direction (0, 1, 0).
fn pixel_direction(x: u32, y: u32, width: u32, height: u32) -> Vec3 {
    let theta = (y as f32 / height as f32) * PI;
    let phi = (x as f32 / width as f32) * (2.0 * PI);

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vec3::new(sin_theta * sin_phi, cos_theta, sin_theta * cos_phi)
}

/// Projects a cubemap into an equirectangular panorama.
///
/// Rows are processed in parallel; every pixel is computed independently from
/// the shared read-only cubemap, so repeated runs over identical inputs
/// produce byte-identical output. The first sampling error aborts the whole
/// run; no partial panorama is returned.
///
/// # Arguments
/// * `cubemap` - The six-face cubemap to sample
/// * `width` - Output width in pixels
/// * `height` - Output height in pixels (conventionally `width / 2`)
pub fn project_equirect(
    cubemap: &Cubemap,
    width: u32,
    height: u32,
) -> Result<Panorama, ProjectionError> {
    if width == 0 || height == 0 {
        return Err(ProjectionError::InvalidDimensions(width, height));
    }

    debug!("projecting {}x{} equirectangular panorama", width, height);

    let row_stride = width as usize * 3;
    let mut data = vec![0u8; row_stride * height as usize];

    data.par_chunks_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            for x in 0..width {
                let direction = pixel_direction(x, y as u32, width, height);
                let color = sample_cubemap(cubemap, direction)?;
                let i = x as usize * 3;
                row[i..i + 3].copy_from_slice(&color);
            }
            Ok::<(), SampleError>(())
        })?;

    Ok(Panorama::from_raw(width, height, data))
}
