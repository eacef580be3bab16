//! Export module for persisting finished panoramas.

mod png;

pub use png::{export_panorama_png, PngExportError, PngExportOptions};
