use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use terrace_field::{PerlinNoise, SampleParams, sample};
use terrace_mesh::{MeshParams, build_mesh, build_mesh_par};

fn noise_grid(size: usize) -> terrace_field::HeightGrid {
    let noise = PerlinNoise {
        width: size,
        height: size,
        seed: 1337,
        ..PerlinNoise::default()
    };
    let map = noise.generate().unwrap();
    sample(&map, &SampleParams::default()).unwrap()
}

fn bench_build_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh");
    let params = MeshParams::default();
    for size in [64usize, 256] {
        let grid = noise_grid(size);
        group.bench_function(format!("seq_{size}x{size}"), |b| {
            b.iter(|| black_box(build_mesh(&grid, &params).unwrap()))
        });
        group.bench_function(format!("par_{size}x{size}"), |b| {
            b.iter(|| black_box(build_mesh_par(&grid, &params).unwrap()))
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let noise = PerlinNoise {
        width: 256,
        height: 256,
        ..PerlinNoise::default()
    };
    let map = noise.generate().unwrap();
    group.bench_function("sample_256x256", |b| {
        b.iter(|| black_box(sample(&map, &SampleParams::default()).unwrap()))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_build_mesh, bench_sample
}
criterion_main!(benches);
