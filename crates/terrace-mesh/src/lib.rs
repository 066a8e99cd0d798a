//! CPU mesher for stepped cuboid terrain: one box per tile, internal walls culled.
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod assemble;
pub mod face;
pub mod mesh_build;
pub mod quad;

pub use adjacency::{face_set, required_side_faces};
pub use assemble::{MeshParams, build_mesh, build_mesh_par};
pub use face::{Face, FaceSet};
pub use mesh_build::MeshBuffers;
pub use quad::{Quad, Winding, build_quad, tile_corners};
