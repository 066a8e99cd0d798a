use terrace_field::TerrainError;
use terrace_geom::Vec3;
use terrace_mesh::{Face, Winding, build_quad, tile_corners};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

fn centroid(vs: &[Vec3; 4]) -> Vec3 {
    (vs[0] + vs[1] + vs[2] + vs[3]) / 4.0
}

#[test]
fn corners_follow_documented_order() {
    let c = tile_corners(Vec3::new(10.0, 2.0, -4.0), 2.0, 4.0);
    assert_eq!(c[0], Vec3::new(9.0, 2.0, -6.0));
    assert_eq!(c[1], Vec3::new(9.0, 2.0, -2.0));
    assert_eq!(c[2], Vec3::new(11.0, 2.0, -6.0));
    assert_eq!(c[3], Vec3::new(11.0, 2.0, -2.0));
}

#[test]
fn winding_index_orders() {
    assert_eq!(Winding::Upward.indices(8), [8, 9, 10, 10, 9, 11]);
    assert_eq!(Winding::Reversed.indices(8), [10, 9, 8, 11, 9, 10]);
}

#[test]
fn top_face_uses_corners_unchanged() {
    let c = tile_corners(Vec3::new(0.0, 3.0, 0.0), 1.0, 1.0);
    let q = build_quad(Face::Top, &c, 0, 1.0).unwrap();
    assert_eq!(q.vertices, c);
    assert_eq!(q.indices, [0, 1, 2, 2, 1, 3]);
}

#[test]
fn bottom_face_drops_by_tile_height() {
    let c = tile_corners(Vec3::new(0.0, 3.0, 0.0), 1.0, 1.0);
    let q = build_quad(Face::Bottom, &c, 4, 2.5).unwrap();
    for (v, corner) in q.vertices.iter().zip(c) {
        assert_eq!(*v, corner.offset_y(-2.5));
    }
    assert_eq!(q.indices, [6, 5, 4, 7, 5, 6]);
}

#[test]
fn side_faces_pair_documented_corners() {
    let c = tile_corners(Vec3::ZERO, 1.0, 1.0);
    let pairs = [
        (Face::North, 1, 3),
        (Face::East, 2, 3),
        (Face::South, 0, 2),
        (Face::West, 0, 1),
    ];
    for (face, a, b) in pairs {
        let q = build_quad(face, &c, 0, 1.0).unwrap();
        assert_eq!(q.vertices[1], c[a], "{face:?}");
        assert_eq!(q.vertices[3], c[b], "{face:?}");
        assert_eq!(q.vertices[0], c[a].offset_y(-1.0), "{face:?}");
        assert_eq!(q.vertices[2], c[b].offset_y(-1.0), "{face:?}");
    }
}

// Both triangles of every face point along the face's outward normal.
#[test]
fn every_face_winds_outward() {
    let center = Vec3::new(1.5, 4.0, -2.0);
    let c = tile_corners(center, 2.0, 3.0);
    let tile_height = 1.5;
    let interior = center.offset_y(-tile_height * 0.5);
    for face in Face::ALL {
        let q = build_quad(face, &c, 12, tile_height).unwrap();
        let n = face.normal();
        for tn in q.triangle_normals() {
            assert!(tn.dot(n) > 0.0, "{face:?} triangle faces inward");
            assert!(vec3_approx_eq(tn.normalized(), n, 1e-5), "{face:?} normal tilted");
        }
        // The quad lies on the side of the box its normal claims.
        assert!((centroid(&q.vertices) - interior).dot(n) > 0.0, "{face:?}");
    }
}

#[test]
fn indices_stay_within_quad_block() {
    let c = tile_corners(Vec3::ZERO, 1.0, 1.0);
    for face in Face::ALL {
        let v = 40;
        let q = build_quad(face, &c, v, 1.0).unwrap();
        assert_eq!(q.base(), v);
        let mut seen = [false; 4];
        for i in q.indices {
            assert!((v..v + 4).contains(&i));
            seen[(i - v) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "{face:?} leaves a vertex unused");
    }
}

#[test]
fn neighboring_walls_share_vertices() {
    let a = tile_corners(Vec3::new(0.0, 2.0, 0.0), 1.0, 1.0);
    let b = tile_corners(Vec3::new(1.0, 2.0, 0.0), 1.0, 1.0);
    let east = build_quad(Face::East, &a, 0, 1.0).unwrap();
    let west = build_quad(Face::West, &b, 0, 1.0).unwrap();
    assert_eq!(east.vertices, west.vertices);

    let c = tile_corners(Vec3::new(0.0, 2.0, 1.0), 1.0, 1.0);
    let north = build_quad(Face::North, &a, 0, 1.0).unwrap();
    let south = build_quad(Face::South, &c, 0, 1.0).unwrap();
    assert_eq!(north.vertices, south.vertices);
}

#[test]
fn zero_height_collapses_to_top() {
    let c = tile_corners(Vec3::new(0.0, 1.0, 0.0), 1.0, 1.0);
    let q = build_quad(Face::Bottom, &c, 0, 0.0).unwrap();
    assert_eq!(q.vertices, c);
    let side = build_quad(Face::North, &c, 0, 0.0).unwrap();
    assert_eq!(side.vertices[0], side.vertices[1]);
}

#[test]
fn too_few_corners_is_an_error() {
    let c = tile_corners(Vec3::ZERO, 1.0, 1.0);
    for face in Face::ALL {
        let err = build_quad(face, &c[..3], 0, 1.0).unwrap_err();
        assert_eq!(err, TerrainError::InvalidCorners(3));
    }
    assert_eq!(
        build_quad(Face::Top, &[], 0, 1.0).unwrap_err(),
        TerrainError::InvalidCorners(0)
    );
}

#[test]
fn face_index_roundtrip() {
    for (i, face) in Face::ALL.into_iter().enumerate() {
        assert_eq!(face.index(), i);
        assert_eq!(Face::from_index(i), Some(face));
    }
    assert_eq!(Face::from_index(6), None);
    assert!(Face::SIDES.iter().all(|f| f.is_side()));
    assert!(!Face::Top.is_side() && !Face::Bottom.is_side());
}
