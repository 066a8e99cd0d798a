use terrace_geom::Vec3;

use crate::error::{TerrainError, require_positive};
use crate::grid::HeightGrid;
use crate::source::HeightSource;

/// Options controlling how source samples become tile positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleParams {
    pub tile_size_x: f32,
    pub tile_size_z: f32,
    /// Multiplier applied to each `[0,1]` sample.
    pub height_scalar: f32,
    /// Heights snap to multiples of this; `0` keeps them continuous.
    pub rounding_unit: f32,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            tile_size_x: 1.0,
            tile_size_z: 1.0,
            height_scalar: 10.0,
            rounding_unit: 5.0,
        }
    }
}

impl SampleParams {
    pub fn validate(&self) -> Result<(), TerrainError> {
        require_positive("tile_size_x", self.tile_size_x)?;
        require_positive("tile_size_z", self.tile_size_z)?;
        if !self.height_scalar.is_finite() {
            return Err(TerrainError::InvalidConfig(format!(
                "height_scalar must be finite, got {}",
                self.height_scalar
            )));
        }
        if !(self.rounding_unit >= 0.0 && self.rounding_unit.is_finite()) {
            return Err(TerrainError::InvalidConfig(format!(
                "rounding_unit must be >= 0, got {}",
                self.rounding_unit
            )));
        }
        Ok(())
    }

    /// Scales a raw sample and snaps it to the rounding unit. Ties go to the even multiple.
    #[inline]
    pub fn quantize(&self, value: f32) -> f32 {
        let h = value * self.height_scalar;
        if self.rounding_unit > 0.0 {
            (h / self.rounding_unit).round_ties_even() * self.rounding_unit
        } else {
            h
        }
    }
}

/// Samples `source` into a grid of tile centers centered on the world origin.
pub fn sample(
    source: &impl HeightSource,
    params: &SampleParams,
) -> Result<HeightGrid, TerrainError> {
    let (width, depth) = (source.width(), source.height());
    if width == 0 || depth == 0 {
        return Err(TerrainError::InvalidSource {
            width,
            height: depth,
        });
    }
    params.validate()?;

    let total = Vec3::new(
        width as f32 * params.tile_size_x,
        0.0,
        depth as f32 * params.tile_size_z,
    );
    let offset = (total - Vec3::new(params.tile_size_x, 0.0, params.tile_size_z)) * 0.5;

    let mut positions = Vec::with_capacity(width * depth);
    for y in 0..depth {
        for x in 0..width {
            let h = params.quantize(source.channel_value(x, y));
            let p = Vec3::new(x as f32 * params.tile_size_x, h, y as f32 * params.tile_size_z);
            positions.push(p - offset);
        }
    }
    log::debug!(
        "sampled {}x{} height grid (tile {}x{}, scalar {}, unit {})",
        width,
        depth,
        params.tile_size_x,
        params.tile_size_z,
        params.height_scalar,
        params.rounding_unit
    );
    HeightGrid::from_positions(width, depth, positions)
}
