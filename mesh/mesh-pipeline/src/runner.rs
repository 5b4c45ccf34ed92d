//! The stage runner.
//!
//! Drives a model through the full inspection sequence: load, repair,
//! canonicalize, sample, reconstruct (optional), voxelize, clip,
//! colorize, and write numbered artifacts. Display geometry goes to the
//! configured [`StageViewer`]; file artifacts are written regardless,
//! so a headless run produces the same outputs as an interactive one.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use mesh_io::{load_mesh, save_mesh, save_point_cloud, IoError};
use mesh_repair::{repair_mesh, RepairParams, RepairSummary};
use mesh_transform::{
    canonicalize_mesh, clip_mesh, colorize_by_axis, find_axis_extrema, AxisExtrema,
    CanonicalizeSummary, ClipSummary, GradientSummary, Plane,
};
use mesh_types::{IndexedMesh, Point3, PointCloud};
use plinth_spatial::{subsample_occupied, VoxelGrid};
use tracing::{debug, info, warn};

use crate::artifacts::{cut_plane_slab, marker_mesh, voxel_art_mesh};
use crate::collaborators::{
    NoopViewer, StageViewer, SurfaceReconstructor, SurfaceSampler, VertexSampler,
};
use crate::config::PipelineConfig;
use crate::error::PipelineResult;

// Stages 4 (voxel art) and 5 (cut plane) are view-only and save
// nothing, hence the gap in the artifact numbering.

/// File name of the repaired, canonical input mesh.
pub const ORIGINAL_FILE: &str = "01_original.ply";

/// File name of the sampled point cloud.
pub const POINT_CLOUD_FILE: &str = "02_pcd.ply";

/// File name of the reconstructed surface, written only when a
/// reconstructor collaborator is supplied.
pub const POISSON_FILE: &str = "03_poisson.ply";

/// File name of the clipped mesh.
pub const CLIPPED_FILE: &str = "06_clipped.ply";

/// File name of the gradient-colored final mesh.
pub const FINAL_FILE: &str = "07_final.ply";

/// Everything a completed run reports back.
///
/// Collects the per-stage summaries plus the artifact paths written, so
/// callers can log or assert on a run without re-reading its outputs.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Cleanup applied to the loaded mesh.
    pub repair: RepairSummary,
    /// Scale and rotation applied to reach the canonical pose.
    pub canonical: CanonicalizeSummary,
    /// Voxel edge length the run used (explicit or auto).
    pub voxel_size: f64,
    /// Number of points the sampler produced.
    pub sampled_points: usize,
    /// Number of occupied cells in the voxel grid.
    pub occupied_voxels: usize,
    /// Number of voxels shown after the display cap.
    pub displayed_voxels: usize,
    /// Faces kept and removed by the clip.
    pub clip: ClipSummary,
    /// Whether the clip removed everything and the run fell back to the
    /// unclipped mesh.
    pub clip_fallback: bool,
    /// Value range the color gradient was stretched over.
    pub gradient: GradientSummary,
    /// Extreme vertices along the gradient axis.
    pub extrema: AxisExtrema,
    /// Paths of every artifact written, in write order.
    pub written: Vec<PathBuf>,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Repair: {} -> {} vertices, {} -> {} faces",
            self.repair.initial_vertices,
            self.repair.final_vertices,
            self.repair.initial_faces,
            self.repair.final_faces
        )?;
        writeln!(f, "{}", self.canonical)?;
        writeln!(
            f,
            "Sampled {} points into {} voxels (size {:.4}), {} displayed",
            self.sampled_points, self.occupied_voxels, self.voxel_size, self.displayed_voxels
        )?;
        if self.clip_fallback {
            writeln!(f, "{} (empty result, kept the unclipped mesh)", self.clip)?;
        } else {
            writeln!(f, "{}", self.clip)?;
        }
        writeln!(f, "{}", self.gradient)?;
        writeln!(
            f,
            "Extrema: min ({:.3}, {:.3}, {:.3}), max ({:.3}, {:.3}, {:.3})",
            self.extrema.min_point.x,
            self.extrema.min_point.y,
            self.extrema.min_point.z,
            self.extrema.max_point.x,
            self.extrema.max_point.y,
            self.extrema.max_point.z
        )?;
        write!(f, "Wrote {} artifacts", self.written.len())
    }
}

/// Run the pipeline with the default collaborators.
///
/// Uses the bundled [`VertexSampler`], no reconstructor (so no
/// reconstruction artifact), and a viewer that discards everything.
///
/// # Errors
///
/// Returns the first failing stage's error; see [`crate::PipelineError`].
pub fn run_pipeline(config: &PipelineConfig) -> PipelineResult<PipelineReport> {
    let sampler = VertexSampler::new(config.subsample_seed);
    let mut viewer = NoopViewer;
    run_pipeline_with(config, &sampler, None, &mut viewer)
}

/// Run the pipeline with explicit collaborators.
///
/// `reconstructor` may be `None`, in which case the reconstruction
/// stage is skipped and no reconstruction artifact is written. Viewer
/// calls are suppressed entirely when the config is headless.
///
/// # Errors
///
/// Returns the first failing stage's error; see [`crate::PipelineError`].
#[allow(clippy::too_many_lines)] // one stage per block, in run order
pub fn run_pipeline_with(
    config: &PipelineConfig,
    sampler: &dyn SurfaceSampler,
    reconstructor: Option<&dyn SurfaceReconstructor>,
    viewer: &mut dyn StageViewer,
) -> PipelineResult<PipelineReport> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir).map_err(IoError::Io)?;

    info!("Loading mesh from {}", config.model.display());
    let mut mesh = load_mesh(&config.model)?;
    debug!("Loaded: {}", mesh.stats());

    let repair = repair_mesh(&mut mesh, &RepairParams::default())?;
    if repair.had_changes() {
        info!(
            "Repaired: {} -> {} vertices, {} -> {} faces",
            repair.initial_vertices, repair.final_vertices, repair.initial_faces, repair.final_faces
        );
    }

    let canonical = canonicalize_mesh(&mut mesh, &config.canonicalize_params())?;
    info!("{canonical}");

    // Everything downstream measures the canonical pose
    let bounds = mesh.bounds();
    let center = bounds.center();
    let voxel_size = config.resolved_voxel_size(bounds.diagonal());
    debug!("Voxel size: {voxel_size:.4}");

    if !config.headless {
        viewer.show_meshes("1. Original", &[&mesh]);
    }

    let cloud = sampler.sample(&mesh, config.sample_count);
    info!("Sampled {} points", cloud.len());
    if !config.headless {
        viewer.show_cloud("2. Point Cloud", &cloud);
    }

    let poisson = match reconstructor {
        Some(reconstructor) => {
            let surface = reconstructor.reconstruct(&cloud)?;
            info!("Reconstructed: {}", surface.stats());
            Some(surface)
        }
        None => {
            debug!("No reconstructor supplied, skipping surface reconstruction");
            None
        }
    };
    if let Some(surface) = poisson.as_ref() {
        if !config.headless {
            viewer.show_meshes("3. Poisson", &[surface]);
        }
    }

    let origin = cloud.bounds().map_or_else(Point3::origin, |b| b.min);
    let grid = VoxelGrid::from_points(voxel_size, origin, cloud.positions().copied())?;
    let displayed = subsample_occupied(&grid, config.display_voxel_cap, config.subsample_seed);
    debug!(
        "Voxel grid: {} occupied cells, {} displayed",
        grid.len(),
        displayed.len()
    );
    if !config.headless {
        let art = voxel_art_mesh(&grid, &displayed);
        if !art.is_empty() {
            viewer.show_meshes("4. Voxel Art", &[&art]);
        }
    }

    if !config.headless {
        let slab = cut_plane_slab(config.axis, center, bounds.size());
        viewer.show_meshes("5. With Cutting Plane", &[&mesh, &slab]);
    }

    let plane = Plane::from_axis(config.axis, center);
    let (clipped, clip) = clip_mesh(&mesh, &plane, config.keep);
    let (clipped, clip_fallback) = if clipped.is_empty() {
        warn!("Clipping removed everything, continuing with the unclipped mesh");
        (mesh.clone(), true)
    } else {
        (clipped, false)
    };
    info!("{clip}");
    if !config.headless {
        viewer.show_meshes("6. Clipped", &[&clipped]);
    }

    let mut final_mesh = clipped.clone();
    let gradient = colorize_by_axis(&mut final_mesh, config.axis);
    info!("{gradient}");

    let extrema = find_axis_extrema(&final_mesh, config.axis)?;
    if !config.headless {
        let markers = extrema.markers(config.marker_radius_scale * voxel_size);
        let min_marker = marker_mesh(&markers[0]);
        let max_marker = marker_mesh(&markers[1]);
        viewer.show_meshes("7. Final Gradient", &[&final_mesh, &min_marker, &max_marker]);
    }

    let mut written = Vec::new();
    written.push(write_mesh_artifact(&config.output_dir, ORIGINAL_FILE, &mesh)?);
    written.push(write_cloud_artifact(
        &config.output_dir,
        POINT_CLOUD_FILE,
        &cloud,
    )?);
    if let Some(surface) = poisson.as_ref() {
        written.push(write_mesh_artifact(&config.output_dir, POISSON_FILE, surface)?);
    }
    written.push(write_mesh_artifact(&config.output_dir, CLIPPED_FILE, &clipped)?);
    written.push(write_mesh_artifact(&config.output_dir, FINAL_FILE, &final_mesh)?);
    info!(
        "Saved {} artifacts to {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(PipelineReport {
        repair,
        canonical,
        voxel_size,
        sampled_points: cloud.len(),
        occupied_voxels: grid.len(),
        displayed_voxels: displayed.len(),
        clip,
        clip_fallback,
        gradient,
        extrema,
        written,
    })
}

fn write_mesh_artifact(dir: &Path, name: &str, mesh: &IndexedMesh) -> PipelineResult<PathBuf> {
    let path = dir.join(name);
    save_mesh(mesh, &path)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

fn write_cloud_artifact(dir: &Path, name: &str, cloud: &PointCloud) -> PipelineResult<PathBuf> {
    let path = dir.join(name);
    save_point_cloud(cloud, &path)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}
