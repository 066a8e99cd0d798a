//! Height sources, noise authoring, and sampling into world-space tile grids.
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod noise;
pub mod sample;
pub mod source;
pub mod texture;

pub use error::TerrainError;
pub use grid::HeightGrid;
pub use noise::PerlinNoise;
pub use sample::{SampleParams, sample};
pub use source::{HeightMap, HeightSource};
pub use texture::{load_height_texture, save_height_texture};
