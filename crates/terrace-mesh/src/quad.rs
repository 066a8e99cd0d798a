use terrace_field::TerrainError;
use terrace_geom::Vec3;

use crate::face::Face;

/// Triangle order for a quad whose vertices are laid out `[0,1,2,3]` as a
/// 2x2 strip sharing the `1-2` diagonal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Winding {
    /// `[v, v+1, v+2, v+2, v+1, v+3]`
    Upward,
    /// `[v+2, v+1, v, v+3, v+1, v+2]`
    Reversed,
}

impl Winding {
    #[inline]
    pub const fn indices(self, v: u32) -> [u32; 6] {
        match self {
            Winding::Upward => [v, v + 1, v + 2, v + 2, v + 1, v + 3],
            Winding::Reversed => [v + 2, v + 1, v, v + 3, v + 1, v + 2],
        }
    }
}

/// Four vertices and two triangles for one face of a tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub face: Face,
    pub vertices: [Vec3; 4],
    /// Absolute indices, always within `base..base + 4`.
    pub indices: [u32; 6],
}

impl Quad {
    /// The vertex index the quad's indices are offset by.
    #[inline]
    pub fn base(&self) -> u32 {
        self.indices.iter().copied().min().unwrap_or(0)
    }

    /// Unnormalized normal of each triangle, from `(b - a) x (c - a)`.
    pub fn triangle_normals(&self) -> [Vec3; 2] {
        let base = self.base();
        let tri = |t: &[u32]| {
            let a = self.vertices[(t[0] - base) as usize];
            let b = self.vertices[(t[1] - base) as usize];
            let c = self.vertices[(t[2] - base) as usize];
            (b - a).cross(c - a)
        };
        [tri(&self.indices[0..3]), tri(&self.indices[3..6])]
    }
}

/// Top corners of a tile centered at `center`:
/// `[(-hx,-hz), (-hx,+hz), (+hx,-hz), (+hx,+hz)]` relative to it.
#[inline]
pub fn tile_corners(center: Vec3, tile_size_x: f32, tile_size_z: f32) -> [Vec3; 4] {
    let hx = tile_size_x * 0.5;
    let hz = tile_size_z * 0.5;
    [
        center + Vec3::new(-hx, 0.0, -hz),
        center + Vec3::new(-hx, 0.0, hz),
        center + Vec3::new(hx, 0.0, -hz),
        center + Vec3::new(hx, 0.0, hz),
    ]
}

type FaceVertices = fn(&[Vec3; 4], f32) -> [Vec3; 4];

// Both tables are indexed by `Face::index()`.
const FACE_VERTICES: [FaceVertices; 6] = [
    top_vertices,
    bottom_vertices,
    north_vertices,
    east_vertices,
    south_vertices,
    west_vertices,
];

const FACE_WINDING: [Winding; 6] = [
    Winding::Upward,
    Winding::Reversed,
    Winding::Reversed,
    Winding::Upward,
    Winding::Upward,
    Winding::Reversed,
];

fn top_vertices(c: &[Vec3; 4], _tile_height: f32) -> [Vec3; 4] {
    *c
}

fn bottom_vertices(c: &[Vec3; 4], tile_height: f32) -> [Vec3; 4] {
    (*c).map(|p| p.offset_y(-tile_height))
}

/// Wall hanging below the top edge `a-b`: `[below a, a, below b, b]`.
#[inline]
fn side_vertices(a: Vec3, b: Vec3, tile_height: f32) -> [Vec3; 4] {
    [a.offset_y(-tile_height), a, b.offset_y(-tile_height), b]
}

fn north_vertices(c: &[Vec3; 4], tile_height: f32) -> [Vec3; 4] {
    side_vertices(c[1], c[3], tile_height)
}

fn east_vertices(c: &[Vec3; 4], tile_height: f32) -> [Vec3; 4] {
    side_vertices(c[2], c[3], tile_height)
}

fn south_vertices(c: &[Vec3; 4], tile_height: f32) -> [Vec3; 4] {
    side_vertices(c[0], c[2], tile_height)
}

fn west_vertices(c: &[Vec3; 4], tile_height: f32) -> [Vec3; 4] {
    side_vertices(c[0], c[1], tile_height)
}

/// Builds the quad for `face` from a tile's top corners (see [`tile_corners`]).
///
/// `v` is the index of the quad's first vertex in the final buffer. The tile
/// extends `tile_height` below its top corners.
pub fn build_quad(
    face: Face,
    corners: &[Vec3],
    v: u32,
    tile_height: f32,
) -> Result<Quad, TerrainError> {
    let Some(c) = corners.first_chunk::<4>() else {
        return Err(TerrainError::InvalidCorners(corners.len()));
    };
    Ok(Quad {
        face,
        vertices: FACE_VERTICES[face.index()](c, tile_height),
        indices: FACE_WINDING[face.index()].indices(v),
    })
}
