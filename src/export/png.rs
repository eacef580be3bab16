//! PNG export for finished panoramas.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::projection::Panorama;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Writes a panorama as an RGB8 PNG.
///
/// # Arguments
/// * `panorama` - The panorama to encode
/// * `path` - Output file path
/// * `options` - PNG compression settings
pub fn export_panorama_png(
    panorama: &Panorama,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        panorama.as_raw(),
        panorama.width(),
        panorama.height(),
        ExtendedColorType::Rgb8,
    )?;

    Ok(())
}
