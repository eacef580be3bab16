//! Cube face identification and enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the six cubemap faces by its viewing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    /// +X face
    Right = 0,
    /// -X face
    Left = 1,
    /// +Y face
    Top = 2,
    /// -Y face
    Bottom = 3,
    /// +Z face
    Front = 4,
    /// -Z face
    Back = 5,
}

impl Face {
    /// Returns all six faces in index order.
    pub const fn all() -> [Face; 6] {
        [
            Face::Right,
            Face::Left,
            Face::Top,
            Face::Bottom,
            Face::Front,
            Face::Back,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<Face> {
        match index {
            0 => Some(Face::Right),
            1 => Some(Face::Left),
            2 => Some(Face::Top),
            3 => Some(Face::Bottom),
            4 => Some(Face::Front),
            5 => Some(Face::Back),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name (e.g., "right", "bottom").
    pub const fn name(self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Left => "left",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Front => "front",
            Face::Back => "back",
        }
    }

    /// Returns the conventional image file name (e.g., "right.png").
    pub const fn file_name(self) -> &'static str {
        match self {
            Face::Right => "right.png",
            Face::Left => "left.png",
            Face::Top => "top.png",
            Face::Bottom => "bottom.png",
            Face::Front => "front.png",
            Face::Back => "back.png",
        }
    }

    /// Looks up a face by its canonical lowercase name.
    pub fn from_name(name: &str) -> Option<Face> {
        Face::all().into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces() {
        let faces = Face::all();
        assert_eq!(faces.len(), 6);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_from_index() {
        for i in 0..6 {
            let face = Face::from_index(i).unwrap();
            assert_eq!(face.index(), i);
        }
        assert!(Face::from_index(6).is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(Face::Right.name(), "right");
        assert_eq!(Face::Bottom.name(), "bottom");
        assert_eq!(Face::Top.file_name(), "top.png");
        assert_eq!(Face::Back.to_string(), "back");
    }

    #[test]
    fn test_from_name() {
        for face in Face::all() {
            assert_eq!(Face::from_name(face.name()), Some(face));
        }
        assert!(Face::from_name("up").is_none());
    }
}
