//! Loads the six cubemap faces from a directory of image files.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::cubemap::{Cubemap, Face, FaceImage, FaceImageError};

/// Errors that can occur while loading a cubemap from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing image for face '{face}': {}", .path.display())]
    MissingFaceFile { face: Face, path: PathBuf },
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid face image: {0}")]
    Face(#[from] FaceImageError),
}

/// Loads a complete cubemap from a directory holding the six canonical face
/// files (`right.png`, `left.png`, `top.png`, `bottom.png`, `front.png`,
/// `back.png`).
///
/// Decodes each file to RGB8. Fails fast on the first missing or
/// undecodable face; a partially loaded cubemap is never returned.
pub fn load_cubemap_dir(dir: &Path) -> Result<Cubemap, LoadError> {
    let mut cubemap = Cubemap::new();

    for face in Face::all() {
        let path = dir.join(face.file_name());
        if !path.exists() {
            return Err(LoadError::MissingFaceFile { face, path });
        }

        let decoded = image::open(&path)?.into_rgb8();
        let (width, height) = decoded.dimensions();
        debug!("loaded face '{}' ({}x{})", face, width, height);

        cubemap.insert(face, FaceImage::from_raw(width, height, decoded.into_raw())?);
    }

    Ok(cubemap)
}
