use terrace_field::HeightGrid;

use crate::face::{Face, FaceSet};

/// Side faces of tile `(x, y)` that must be drawn.
///
/// A side is required when its orthogonal neighbor is past the edge of the
/// grid or sits at a different height. Diagonal neighbors never matter.
pub fn required_side_faces(grid: &HeightGrid, x: usize, y: usize) -> FaceSet {
    let mut set = FaceSet::EMPTY;
    let Some(here) = grid.get(x, y) else {
        return set;
    };
    for face in Face::SIDES {
        let (dx, dy) = face.delta();
        match grid.neighbor(x, y, dx, dy) {
            Some(nb) if nb.y == here.y => {}
            _ => set.insert(face),
        }
    }
    set
}

/// Every face tile `(x, y)` emits: top and bottom plus the required sides.
#[inline]
pub fn face_set(grid: &HeightGrid, x: usize, y: usize) -> FaceSet {
    FaceSet::CAPS.union(required_side_faces(grid, x, y))
}
