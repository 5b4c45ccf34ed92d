//! Benchmarks for mesh pose and clipping operations.
//!
//! Run with: cargo bench -p mesh-transform
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-transform -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-transform -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use mesh_transform::{canonicalize_mesh, clip_mesh, CanonicalizeParams, ClipSide, Plane};
use mesh_types::{unit_cube, Axis, IndexedMesh, Point3, Vertex};
use std::collections::HashMap;

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create an icosphere mesh with the specified subdivision level.
fn create_sphere(subdivisions: u32) -> IndexedMesh {
    let mut mesh = IndexedMesh::new();

    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let a = 1.0;
    let b = 1.0 / phi;

    let ico_verts = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    for v in &ico_verts {
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        mesh.vertices
            .push(Vertex::from_coords(v[0] / len, v[1] / len, v[2] / len));
    }

    let ico_faces: [[u32; 3]; 20] = [
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ];

    for f in &ico_faces {
        mesh.faces.push(*f);
    }

    for _ in 0..subdivisions {
        mesh = subdivide_sphere(&mesh);
    }

    mesh
}

fn subdivide_sphere(mesh: &IndexedMesh) -> IndexedMesh {
    let mut new_mesh = IndexedMesh::new();
    new_mesh.vertices = mesh.vertices.clone();

    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for face in &mesh.faces {
        let [v0, v1, v2] = *face;

        let m01 = get_midpoint(v0, v1, &mut new_mesh.vertices, &mut edge_midpoints);
        let m12 = get_midpoint(v1, v2, &mut new_mesh.vertices, &mut edge_midpoints);
        let m20 = get_midpoint(v2, v0, &mut new_mesh.vertices, &mut edge_midpoints);

        new_mesh.faces.push([v0, m01, m20]);
        new_mesh.faces.push([v1, m12, m01]);
        new_mesh.faces.push([v2, m20, m12]);
        new_mesh.faces.push([m01, m12, m20]);
    }

    new_mesh
}

fn get_midpoint(
    v1: u32,
    v2: u32,
    vertices: &mut Vec<Vertex>,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };

    if let Some(&idx) = edge_midpoints.get(&key) {
        return idx;
    }

    let mid = (vertices[v1 as usize].position.coords + vertices[v2 as usize].position.coords) * 0.5;
    let on_sphere = mid / mid.norm();

    let idx = vertices.len() as u32;
    vertices.push(Vertex::new(on_sphere.into()));
    edge_midpoints.insert(key, idx);
    idx
}

// =============================================================================
// Canonical Pose Benchmarks
// =============================================================================

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Canonicalize");

    let test_cases = [
        ("cube_12tri", unit_cube()),
        ("sphere_320tri", create_sphere(2)),
        ("sphere_1280tri", create_sphere(3)),
        ("sphere_5120tri", create_sphere(4)),
    ];

    for (name, mesh) in &test_cases {
        group.throughput(Throughput::Elements(mesh.vertices.len() as u64));

        group.bench_with_input(BenchmarkId::new("canonicalize", name), mesh, |b, mesh| {
            let params = CanonicalizeParams::default();
            b.iter_batched(
                || mesh.clone(),
                |mut m| canonicalize_mesh(&mut m, &params),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// =============================================================================
// Clipping Benchmarks
// =============================================================================

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Clipping");

    let test_cases = [
        ("cube_12tri", unit_cube()),
        ("sphere_320tri", create_sphere(2)),
        ("sphere_1280tri", create_sphere(3)),
        ("sphere_5120tri", create_sphere(4)),
    ];

    for (name, mesh) in &test_cases {
        group.throughput(Throughput::Elements(mesh.faces.len() as u64));

        let plane = Plane::from_axis(Axis::Y, Point3::origin());

        group.bench_with_input(BenchmarkId::new("clip_lower_half", name), mesh, |b, mesh| {
            b.iter(|| clip_mesh(black_box(mesh), &plane, ClipSide::Left))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_clip);

criterion_main!(benches);
