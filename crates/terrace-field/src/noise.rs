use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::Rng;

use crate::error::TerrainError;
use crate::source::HeightMap;

/// Largest seed handed out by [`PerlinNoise::randomize_seed`].
pub const MAX_SEED: i32 = 999_999;

/// Settings for authoring a Perlin noise height texture.
#[derive(Clone, Debug, PartialEq)]
pub struct PerlinNoise {
    pub width: usize,
    pub height: usize,
    pub seed: i32,
    /// Number of noise periods spanned by the full resolution.
    pub scale: f32,
    /// Snap every sample to 0 or 1.
    pub contrast: bool,
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: 0,
            scale: 20.0,
            contrast: false,
        }
    }
}

impl PerlinNoise {
    pub fn randomize_seed(&mut self) {
        self.seed = rand::thread_rng().gen_range(0..=MAX_SEED);
    }

    fn noise(&self) -> FastNoiseLite {
        let mut n = FastNoiseLite::with_seed(self.seed);
        n.set_noise_type(Some(NoiseType::Perlin));
        n.set_frequency(Some(1.0));
        n
    }

    fn check(&self) -> Result<(), TerrainError> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::InvalidSource {
                width: self.width,
                height: self.height,
            });
        }
        if !self.scale.is_finite() {
            return Err(TerrainError::InvalidConfig(format!(
                "noise scale must be finite, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    #[inline]
    fn sample_with(&self, n: &FastNoiseLite, x: usize, y: usize) -> f32 {
        let nx = x as f32 / self.width as f32 * self.scale;
        let ny = y as f32 / self.height as f32 * self.scale;
        ((n.get_noise_2d(nx, ny) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Noise value in `[0,1]` at pixel `(x, y)`, before any contrast snapping.
    pub fn sample_at(&self, x: usize, y: usize) -> f32 {
        self.sample_with(&self.noise(), x, y)
    }

    /// Fills a height map at the configured resolution.
    pub fn generate(&self) -> Result<HeightMap, TerrainError> {
        self.check()?;
        let n = self.noise();
        let mut map =
            HeightMap::from_fn(self.width, self.height, |x, y| self.sample_with(&n, x, y));
        if self.contrast {
            max_contrast(&mut map);
        }
        log::debug!(
            "generated {}x{} perlin noise (seed {}, scale {}, contrast {})",
            self.width,
            self.height,
            self.seed,
            self.scale,
            self.contrast
        );
        Ok(map)
    }

    /// Default texture file name, e.g. `[64][64](20)0.png`.
    pub fn file_name(&self) -> String {
        format!("[{}][{}]({}){}.png", self.width, self.height, self.scale, self.seed)
    }
}

/// Rounds every sample to black (0) or white (1); exactly 0.5 goes to black.
pub fn max_contrast(map: &mut HeightMap) {
    for v in map.values_mut() {
        *v = v.round_ties_even().clamp(0.0, 1.0);
    }
}
