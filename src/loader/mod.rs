//! Loading decoded face images into a [`Cubemap`](crate::cubemap::Cubemap).

mod directory;

pub use directory::{load_cubemap_dir, LoadError};
