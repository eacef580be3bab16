//! Face pixel buffers and the six-face cubemap container.

use thiserror::Error;

use super::face::Face;

/// Errors from constructing a [`FaceImage`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceImageError {
    #[error("Invalid face dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Pixel data length {actual} does not match {width}x{height}x3 = {expected}")]
    DataLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// An RGB8 pixel buffer for a single cube face.
///
/// Pixels are stored row-major, 3 bytes per pixel. Faces are read-only inputs
/// to projection and are never mutated by the engine.
#[derive(Debug, Clone)]
pub struct FaceImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FaceImage {
    /// Creates a face image from raw RGB8 pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels (must be >= 1)
    /// * `height` - Image height in pixels (must be >= 1)
    /// * `data` - Row-major RGB8 pixel data, exactly `width * height * 3` bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FaceImageError> {
        if width == 0 || height == 0 {
            return Err(FaceImageError::InvalidDimensions(width, height));
        }

        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(FaceImageError::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the color at the given pixel coordinate.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        debug_assert!(x < self.width && y < self.height);
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Returns the raw RGB8 pixel data.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

/// Maps each of the six [`Face`] directions to an optional [`FaceImage`].
///
/// All six faces must be present before projection begins; sampling a
/// direction that resolves to an absent face is an error.
#[derive(Debug, Clone, Default)]
pub struct Cubemap {
    faces: [Option<FaceImage>; 6],
}

impl Cubemap {
    /// Creates an empty cubemap with no faces loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an image for a face, returning the previous image if any.
    pub fn insert(&mut self, face: Face, image: FaceImage) -> Option<FaceImage> {
        self.faces[face.index()].replace(image)
    }

    /// Returns the image for a face, if loaded.
    pub fn face(&self, face: Face) -> Option<&FaceImage> {
        self.faces[face.index()].as_ref()
    }

    /// Returns true if all six faces are loaded.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(|f| f.is_some())
    }

    /// Returns the faces that have no image loaded.
    pub fn missing_faces(&self) -> Vec<Face> {
        Face::all()
            .into_iter()
            .filter(|f| self.faces[f.index()].is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let image = FaceImage::from_raw(2, 2, vec![0; 12]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.as_raw().len(), 12);
    }

    #[test]
    fn test_from_raw_rejects_zero_dimensions() {
        let err = FaceImage::from_raw(0, 2, vec![]).unwrap_err();
        assert_eq!(err, FaceImageError::InvalidDimensions(0, 2));

        let err = FaceImage::from_raw(2, 0, vec![]).unwrap_err();
        assert_eq!(err, FaceImageError::InvalidDimensions(2, 0));
    }

    #[test]
    fn test_from_raw_rejects_bad_length() {
        let err = FaceImage::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            FaceImageError::DataLength {
                width: 2,
                height: 2,
                expected: 12,
                actual: 11,
            }
        );
    }

    #[test]
    fn test_pixel_lookup() {
        // 2x2 image, one distinct channel pattern per pixel.
        let data = vec![
            1, 2, 3, // (0, 0)
            4, 5, 6, // (1, 0)
            7, 8, 9, // (0, 1)
            10, 11, 12, // (1, 1)
        ];
        let image = FaceImage::from_raw(2, 2, data).unwrap();

        assert_eq!(image.pixel(0, 0), [1, 2, 3]);
        assert_eq!(image.pixel(1, 0), [4, 5, 6]);
        assert_eq!(image.pixel(0, 1), [7, 8, 9]);
        assert_eq!(image.pixel(1, 1), [10, 11, 12]);
    }

    #[test]
    fn test_cubemap_insert_and_lookup() {
        let mut cubemap = Cubemap::new();
        assert!(cubemap.face(Face::Front).is_none());

        let image = FaceImage::from_raw(1, 1, vec![9, 9, 9]).unwrap();
        assert!(cubemap.insert(Face::Front, image).is_none());
        assert_eq!(cubemap.face(Face::Front).unwrap().pixel(0, 0), [9, 9, 9]);

        let replacement = FaceImage::from_raw(1, 1, vec![1, 1, 1]).unwrap();
        let previous = cubemap.insert(Face::Front, replacement).unwrap();
        assert_eq!(previous.pixel(0, 0), [9, 9, 9]);
    }

    #[test]
    fn test_cubemap_completeness() {
        let mut cubemap = Cubemap::new();
        assert!(!cubemap.is_complete());
        assert_eq!(cubemap.missing_faces().len(), 6);

        for face in Face::all() {
            cubemap.insert(face, FaceImage::from_raw(1, 1, vec![0; 3]).unwrap());
        }
        assert!(cubemap.is_complete());
        assert!(cubemap.missing_faces().is_empty());
    }
}
