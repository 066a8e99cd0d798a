use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use terrace_field::{PerlinNoise, SampleParams};
use terrace_mesh::MeshParams;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TerrainConfig {
    #[serde(default)]
    pub tile: Tile,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub noise: Noise,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tile {
    #[serde(default = "d_one")]
    pub size_x: f32,
    #[serde(default = "d_one")]
    pub size_z: f32,
    #[serde(default = "d_one")]
    pub height: f32,
}
impl Default for Tile {
    fn default() -> Self {
        Self {
            size_x: 1.0,
            size_z: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_height_scalar")]
    pub scalar: f32,
    /// Heights snap to multiples of this; 0 disables snapping.
    #[serde(default = "default_rounding_unit")]
    pub rounding_unit: f32,
}
fn default_height_scalar() -> f32 {
    10.0
}
fn default_rounding_unit() -> f32 {
    5.0
}
impl Default for Height {
    fn default() -> Self {
        Self {
            scalar: default_height_scalar(),
            rounding_unit: default_rounding_unit(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Noise {
    #[serde(default = "default_resolution")]
    pub width: usize,
    #[serde(default = "default_resolution")]
    pub height: usize,
    #[serde(default)]
    pub seed: i32,
    #[serde(default = "default_noise_scale")]
    pub scale: f32,
    #[serde(default)]
    pub contrast: bool,
}
fn default_resolution() -> usize {
    64
}
fn default_noise_scale() -> f32 {
    20.0
}
impl Default for Noise {
    fn default() -> Self {
        Self {
            width: default_resolution(),
            height: default_resolution(),
            seed: 0,
            scale: default_noise_scale(),
            contrast: false,
        }
    }
}

fn d_one() -> f32 {
    1.0
}

impl TerrainConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn sample_params(&self) -> SampleParams {
        SampleParams {
            tile_size_x: self.tile.size_x,
            tile_size_z: self.tile.size_z,
            height_scalar: self.height.scalar,
            rounding_unit: self.height.rounding_unit,
        }
    }

    pub fn mesh_params(&self) -> MeshParams {
        MeshParams {
            tile_size_x: self.tile.size_x,
            tile_size_z: self.tile.size_z,
            tile_height: self.tile.height,
        }
    }

    pub fn perlin(&self) -> PerlinNoise {
        PerlinNoise {
            width: self.noise.width,
            height: self.noise.height,
            seed: self.noise.seed,
            scale: self.noise.scale,
            contrast: self.noise.contrast,
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<TerrainConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    TerrainConfig::from_toml_str(&s)
}
