use image::RgbaImage;

use crate::error::TerrainError;

/// Any 2D scalar field that can be sampled into a height grid.
///
/// `channel_value` is expected in `[0,1]` for `x < width()` and `y < height()`.
pub trait HeightSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channel_value(&self, x: usize, y: usize) -> f32;
}

/// Owned row-major buffer of height samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl HeightMap {
    pub fn new(width: usize, height: usize, values: Vec<f32>) -> Result<Self, TerrainError> {
        if values.len() != width * height {
            return Err(TerrainError::InvalidSource { width, height });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// A map where every sample has the same value.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    /// Builds a map by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[self.idx(x, y)])
        } else {
            None
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }
}

impl HeightSource for HeightMap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn channel_value(&self, x: usize, y: usize) -> f32 {
        self.values[self.idx(x, y)]
    }
}

/// Reads the red channel. Texture rows grow upward, so `y = 0` is the last image row.
impl HeightSource for RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    #[inline]
    fn channel_value(&self, x: usize, y: usize) -> f32 {
        let row = self.dimensions().1 as usize - 1 - y;
        let px = self.get_pixel(x as u32, row as u32);
        f32::from(px[0]) / 255.0
    }
}
