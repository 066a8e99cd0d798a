use rayon::prelude::*;
use terrace_field::error::require_positive;
use terrace_field::{HeightGrid, TerrainError};
use terrace_geom::Vec3;

use crate::adjacency::face_set;
use crate::face::FaceSet;
use crate::mesh_build::{MeshBuffers, MeshBuild};
use crate::quad::{build_quad, tile_corners};

/// Most quads one tile can emit.
const MAX_QUADS_PER_TILE: usize = 6;
const VERTS_PER_QUAD: usize = 4;

/// Tile box dimensions used when turning grid positions into geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshParams {
    pub tile_size_x: f32,
    pub tile_size_z: f32,
    /// Depth of each box below its top face. `0` flattens sides and bottom to slivers.
    pub tile_height: f32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            tile_size_x: 1.0,
            tile_size_z: 1.0,
            tile_height: 1.0,
        }
    }
}

impl MeshParams {
    pub fn validate(&self) -> Result<(), TerrainError> {
        require_positive("tile_size_x", self.tile_size_x)?;
        require_positive("tile_size_z", self.tile_size_z)?;
        if !(self.tile_height >= 0.0 && self.tile_height.is_finite()) {
            return Err(TerrainError::InvalidConfig(format!(
                "tile_height must be >= 0, got {}",
                self.tile_height
            )));
        }
        Ok(())
    }
}

fn check_index_range(grid: &HeightGrid) -> Result<(), TerrainError> {
    let worst = grid
        .len()
        .checked_mul(MAX_QUADS_PER_TILE * VERTS_PER_QUAD);
    match worst {
        Some(n) if n <= u32::MAX as usize => Ok(()),
        _ => Err(TerrainError::InvalidConfig(format!(
            "{}x{} grid can exceed 32-bit vertex indices",
            grid.width(),
            grid.depth()
        ))),
    }
}

#[inline]
fn emit_tile(
    mb: &mut MeshBuild,
    center: Vec3,
    faces: FaceSet,
    params: &MeshParams,
) -> Result<(), TerrainError> {
    let corners = tile_corners(center, params.tile_size_x, params.tile_size_z);
    for face in faces.iter() {
        let quad = build_quad(face, &corners, mb.next_vertex(), params.tile_height)?;
        mb.push_quad(&quad);
    }
    Ok(())
}

fn log_stats(grid: &HeightGrid, mesh: &MeshBuffers) {
    let tiles = grid.len();
    let sides = mesh.quad_count() - 2 * tiles;
    log::debug!(
        "assembled {} tiles: {} quads, {} vertices, {} side faces culled",
        tiles,
        mesh.quad_count(),
        mesh.vertex_count(),
        4 * tiles - sides
    );
}

/// Builds the terrain mesh, visiting tiles in row-major order.
///
/// Every tile gets a top and bottom quad plus the side quads
/// [`face_set`] asks for. An empty grid yields an empty mesh.
pub fn build_mesh(grid: &HeightGrid, params: &MeshParams) -> Result<MeshBuffers, TerrainError> {
    params.validate()?;
    if grid.is_empty() {
        return Ok(MeshBuffers::empty());
    }
    check_index_range(grid)?;

    let mut mb = MeshBuild::new();
    mb.reserve_quads(grid.len() * 2);
    for (x, y, center) in grid.iter() {
        emit_tile(&mut mb, *center, face_set(grid, x, y), params)?;
    }
    let mesh = mb.finish();
    log_stats(grid, &mesh);
    Ok(mesh)
}

/// Same output as [`build_mesh`], with rows built on the rayon pool.
///
/// Face sets are resolved first so each row's first vertex index is known
/// before any geometry is emitted.
pub fn build_mesh_par(grid: &HeightGrid, params: &MeshParams) -> Result<MeshBuffers, TerrainError> {
    params.validate()?;
    if grid.is_empty() {
        return Ok(MeshBuffers::empty());
    }
    check_index_range(grid)?;

    let row_faces: Vec<Vec<FaceSet>> = (0..grid.depth())
        .into_par_iter()
        .map(|y| (0..grid.width()).map(|x| face_set(grid, x, y)).collect::<Vec<_>>())
        .collect();

    let mut bases = Vec::with_capacity(row_faces.len());
    let mut next = 0u32;
    let mut total_quads = 0usize;
    for faces in &row_faces {
        let quads: usize = faces.iter().map(|f| f.len()).sum();
        bases.push(next);
        next += (quads * VERTS_PER_QUAD) as u32;
        total_quads += quads;
    }

    let rows = row_faces
        .par_iter()
        .zip(bases.par_iter())
        .enumerate()
        .map(|(y, (faces, &base))| -> Result<MeshBuild, TerrainError> {
            let mut mb = MeshBuild::with_base(base);
            mb.reserve_quads(faces.iter().map(|f| f.len()).sum());
            for (center, &set) in grid.row(y).iter().zip(faces) {
                emit_tile(&mut mb, *center, set, params)?;
            }
            Ok(mb)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = MeshBuild::new();
    out.reserve_quads(total_quads);
    for row in rows {
        out.append(row);
    }
    let mesh = out.finish();
    log_stats(grid, &mesh);
    Ok(mesh)
}
