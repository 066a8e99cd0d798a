use terrace_geom::Vec3;

use crate::error::TerrainError;

/// World-space tile centers laid out `width` x `depth`, row-major by `y`.
///
/// Each position is the center of a tile's top face; `y` holds its height.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    width: usize,
    depth: usize,
    positions: Vec<Vec3>,
}

impl HeightGrid {
    pub fn from_positions(
        width: usize,
        depth: usize,
        positions: Vec<Vec3>,
    ) -> Result<Self, TerrainError> {
        if positions.len() != width * depth {
            return Err(TerrainError::InvalidSource {
                width,
                height: depth,
            });
        }
        Ok(Self {
            width,
            depth,
            positions,
        })
    }

    /// A grid with no tiles.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            depth: 0,
            positions: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Vec3> {
        if x < self.width && y < self.depth {
            Some(&self.positions[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Tile at `(x+dx, y+dy)`, or `None` past the edge of the grid.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<&Vec3> {
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        self.get(nx, ny)
    }

    /// Positions in row-major order with their `(x, y)` coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Vec3)> + '_ {
        let w = self.width.max(1);
        self.positions
            .iter()
            .enumerate()
            .map(move |(i, p)| (i % w, i / w, p))
    }

    /// One row of tiles (fixed `y`).
    #[inline]
    pub fn row(&self, y: usize) -> &[Vec3] {
        let start = y * self.width;
        &self.positions[start..start + self.width]
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}
