use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use terrace_mesh::MeshBuffers;

/// Writes positions, normals and triangles as Wavefront OBJ (1-based `v//vn` faces).
pub fn write_obj(mesh: &MeshBuffers, mut out: impl Write) -> io::Result<()> {
    writeln!(
        out,
        "# terrace: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for p in mesh.positions().chunks_exact(3) {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for n in mesh.normals().chunks_exact(3) {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}

pub fn save_obj(mesh: &MeshBuffers, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_obj(mesh, BufWriter::new(file))?;
    log::info!("wrote {} ({} quads)", path.display(), mesh.quad_count());
    Ok(())
}
