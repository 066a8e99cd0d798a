use terrace_geom::{Aabb, Vec3};

use crate::quad::Quad;

/// Append-only accumulator for quads. Indices start at `base_vertex`, so a
/// build can cover a slice of a larger mesh.
#[derive(Default, Clone, Debug, PartialEq)]
pub(crate) struct MeshBuild {
    pub(crate) pos: Vec<f32>,
    pub(crate) norm: Vec<f32>,
    pub(crate) idx: Vec<u32>,
    base_vertex: u32,
}

impl MeshBuild {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A build whose first vertex will be `base_vertex` in the combined mesh.
    pub(crate) fn with_base(base_vertex: u32) -> Self {
        Self {
            base_vertex,
            ..Self::default()
        }
    }

    /// Pre-reserve capacity for `n_quads` quads worth of data.
    #[inline]
    pub(crate) fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.idx.reserve(n_quads * 6);
    }

    /// Index the next pushed quad must be built with.
    #[inline]
    pub(crate) fn next_vertex(&self) -> u32 {
        self.base_vertex + (self.pos.len() / 3) as u32
    }

    /// Appends a quad built at [`next_vertex`](Self::next_vertex).
    pub(crate) fn push_quad(&mut self, quad: &Quad) {
        debug_assert_eq!(quad.base(), self.next_vertex());
        let n = quad.face.normal();
        for p in &quad.vertices {
            self.pos.extend_from_slice(&p.to_array());
            self.norm.extend_from_slice(&n.to_array());
        }
        self.idx.extend_from_slice(&quad.indices);
    }

    /// Appends another build that starts where this one ends.
    pub(crate) fn append(&mut self, mut other: MeshBuild) {
        debug_assert_eq!(other.base_vertex, self.next_vertex());
        self.pos.append(&mut other.pos);
        self.norm.append(&mut other.norm);
        self.idx.append(&mut other.idx);
    }

    pub(crate) fn finish(self) -> MeshBuffers {
        MeshBuffers {
            pos: self.pos,
            norm: self.norm,
            idx: self.idx,
        }
    }
}

/// Finished terrain mesh: flat `xyz` positions and normals, triangles as index triples.
///
/// Vertices are never shared between quads.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    pos: Vec<f32>,
    norm: Vec<f32>,
    idx: Vec<u32>,
}

impl MeshBuffers {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Option<Vec3> {
        let s = self.pos.get(i * 3..i * 3 + 3)?;
        Some(Vec3::new(s[0], s[1], s[2]))
    }

    pub fn normal(&self, i: usize) -> Option<Vec3> {
        let s = self.norm.get(i * 3..i * 3 + 3)?;
        Some(Vec3::new(s[0], s[1], s[2]))
    }

    /// Triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.idx.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.pos.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2])))
    }
}
