//! Collaborator seams for stages the pipeline does not own.
//!
//! Uniform surface sampling, Poisson-style reconstruction, and
//! interactive display are external concerns: the pipeline consumes
//! their outputs but ships no real implementation of any of them. The
//! traits here pin down the contracts, and the bundled defaults (a
//! vertex-reusing sampler, a viewer that discards everything) keep a
//! bare pipeline runnable end to end.

use mesh_types::{IndexedMesh, PointCloud};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PipelineResult;

/// Produces a point sample of a mesh surface.
pub trait SurfaceSampler {
    /// Sample at most `count` points from the mesh surface, carrying
    /// normals when the sampler can provide them.
    fn sample(&self, mesh: &IndexedMesh, count: usize) -> PointCloud;
}

/// Rebuilds a watertight surface from a sampled point cloud.
///
/// Stands in for Poisson reconstruction. Runs without a reconstructor
/// skip the reconstruction artifact entirely.
pub trait SurfaceReconstructor {
    /// Build a new mesh approximating the cloud's surface.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PipelineError::Reconstruction`] when the
    /// collaborator cannot produce a surface for this cloud.
    fn reconstruct(&self, cloud: &PointCloud) -> PipelineResult<IndexedMesh>;
}

/// Receives stage geometry for interactive display.
///
/// The pipeline never opens a window itself; it hands each stage's
/// geometry to whatever viewer it was given. Stage names are short
/// human-readable labels like `"1. Original"`.
pub trait StageViewer {
    /// Present one or more meshes for a named stage.
    fn show_meshes(&mut self, stage: &str, meshes: &[&IndexedMesh]);

    /// Present a point cloud for a named stage.
    fn show_cloud(&mut self, stage: &str, cloud: &PointCloud);
}

/// Viewer that discards everything it is shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl StageViewer for NoopViewer {
    fn show_meshes(&mut self, _stage: &str, _meshes: &[&IndexedMesh]) {}

    fn show_cloud(&mut self, _stage: &str, _cloud: &PointCloud) {}
}

/// Sampler that reuses mesh vertices as the surface sample.
///
/// Area-weighted sampling belongs to an external collaborator; this
/// stand-in hands back the mesh's own vertices (positions, normals,
/// colors) instead. When the mesh has more vertices than requested, a
/// seeded uniform subset is drawn, so the same mesh and seed always
/// sample the same points.
#[derive(Debug, Clone, Copy)]
pub struct VertexSampler {
    seed: u64,
}

impl VertexSampler {
    /// Create a sampler drawing subsets with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SurfaceSampler for VertexSampler {
    fn sample(&self, mesh: &IndexedMesh, count: usize) -> PointCloud {
        let full = PointCloud::from_mesh(mesh);
        if full.len() <= count {
            return full;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut picked: Vec<usize> =
            rand::seq::index::sample(&mut rng, full.len(), count).into_vec();
        // Keep the surviving points in vertex order
        picked.sort_unstable();
        PointCloud {
            points: picked.into_iter().map(|i| full.points[i]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::unit_cube;

    #[test]
    fn vertex_sampler_returns_all_when_under_count() {
        let mesh = unit_cube();
        let cloud = VertexSampler::new(0).sample(&mesh, 100);
        assert_eq!(cloud.len(), mesh.vertex_count());
    }

    #[test]
    fn vertex_sampler_caps_at_count() {
        let mesh = unit_cube();
        let cloud = VertexSampler::new(0).sample(&mesh, 3);
        assert_eq!(cloud.len(), 3);
    }

    #[test]
    fn vertex_sampler_is_deterministic() {
        let mesh = unit_cube();
        let sampler = VertexSampler::new(7);
        let a = sampler.sample(&mesh, 5);
        let b = sampler.sample(&mesh, 5);
        let positions_a: Vec<_> = a.positions().copied().collect();
        let positions_b: Vec<_> = b.positions().copied().collect();
        assert_eq!(positions_a, positions_b);
    }

    #[test]
    fn vertex_sampler_points_come_from_mesh() {
        let mesh = unit_cube();
        let cloud = VertexSampler::new(3).sample(&mesh, 4);
        for point in &cloud.points {
            assert!(mesh
                .vertices
                .iter()
                .any(|v| v.position == point.position));
        }
    }

    #[test]
    fn noop_viewer_accepts_everything() {
        let mesh = unit_cube();
        let cloud = PointCloud::from_mesh(&mesh);
        let mut viewer = NoopViewer;
        viewer.show_meshes("1. Original", &[&mesh]);
        viewer.show_cloud("2. Point Cloud", &cloud);
    }
}
