use proptest::prelude::*;
use terrace_field::{HeightGrid, HeightMap, SampleParams, sample};
use terrace_mesh::{MeshParams, build_mesh, build_mesh_par, face_set};

// Heights drawn from a few levels so equal neighbors (and culling) are common.
fn arb_grid() -> impl Strategy<Value = HeightGrid> {
    (1usize..9, 1usize..9)
        .prop_flat_map(|(w, d)| {
            (
                Just(w),
                Just(d),
                proptest::collection::vec(0u8..3, w * d),
            )
        })
        .prop_map(|(w, d, levels)| {
            let map = HeightMap::new(w, d, levels.into_iter().map(|l| l as f32 * 0.5).collect())
                .unwrap();
            let params = SampleParams {
                tile_size_x: 1.0,
                tile_size_z: 1.0,
                height_scalar: 4.0,
                rounding_unit: 1.0,
            };
            sample(&map, &params).unwrap()
        })
}

fn arb_params() -> impl Strategy<Value = MeshParams> {
    (0.25f32..4.0, 0.25f32..4.0, 0.1f32..3.0).prop_map(|(tile_size_x, tile_size_z, tile_height)| {
        MeshParams {
            tile_size_x,
            tile_size_z,
            tile_height,
        }
    })
}

proptest! {
    // Buffer sizes follow the emitted quad count and every index is in range.
    #[test]
    fn counts_and_indices_are_consistent(grid in arb_grid(), params in arb_params()) {
        let mesh = build_mesh(&grid, &params).unwrap();
        let quads: usize = grid.iter().map(|(x, y, _)| face_set(&grid, x, y).len()).sum();
        prop_assert_eq!(mesh.quad_count(), quads);
        prop_assert_eq!(mesh.vertex_count(), 4 * quads);
        prop_assert_eq!(mesh.indices().len(), 6 * quads);
        let n = mesh.vertex_count() as u32;
        prop_assert!(mesh.indices().iter().all(|&i| i < n));
    }

    // Each triangle winds toward the outward normal of the face it belongs to.
    #[test]
    fn triangles_face_outward(grid in arb_grid(), params in arb_params()) {
        let mesh = build_mesh(&grid, &params).unwrap();
        for [a, b, c] in mesh.triangles() {
            let pa = mesh.vertex(a as usize).unwrap();
            let pb = mesh.vertex(b as usize).unwrap();
            let pc = mesh.vertex(c as usize).unwrap();
            let n = mesh.normal(a as usize).unwrap();
            prop_assert!((pb - pa).cross(pc - pa).dot(n) > 0.0);
        }
    }

    #[test]
    fn parallel_matches_sequential(grid in arb_grid(), params in arb_params()) {
        prop_assert_eq!(
            build_mesh_par(&grid, &params).unwrap(),
            build_mesh(&grid, &params).unwrap()
        );
    }

    // Side quads only appear on the perimeter or where heights change.
    #[test]
    fn side_count_bounded_by_height_changes(grid in arb_grid()) {
        let (w, d) = (grid.width(), grid.depth());
        let mut boundaries = 2 * (w + d);
        for (x, y, p) in grid.iter() {
            if x + 1 < w && grid.get(x + 1, y).unwrap().y != p.y {
                boundaries += 2;
            }
            if y + 1 < d && grid.get(x, y + 1).unwrap().y != p.y {
                boundaries += 2;
            }
        }
        let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
        prop_assert_eq!(mesh.quad_count(), 2 * w * d + boundaries);
    }
}
