//! Pipeline configuration.
//!
//! One struct carries everything a run needs: the input model, the
//! output directory, the clip axis and side, and the tuning knobs the
//! stages expose. Every field has a documented default so a config
//! built from just a model path reproduces the standard run.

use std::path::PathBuf;

use mesh_transform::{CanonicalizeParams, ClipSide};
use mesh_types::Axis;
use plinth_spatial::auto_cell_size;

use crate::error::{PipelineError, PipelineResult};

/// Default output directory for numbered artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "output_ply";

/// Default number of surface sample points.
pub const DEFAULT_SAMPLE_COUNT: usize = 50_000;

/// Default canonical height for the tallest bounding-box extent.
pub const DEFAULT_TARGET_HEIGHT: f64 = 1.8;

/// Default cap on voxels handed to the viewer.
pub const DEFAULT_DISPLAY_VOXEL_CAP: usize = 3000;

/// Default extrema marker radius, as a multiple of the voxel size.
pub const DEFAULT_MARKER_RADIUS_SCALE: f64 = 2.0;

/// Default seed for the voxel display subsample.
///
/// Fixed so repeated runs over the same model show the same voxels.
pub const DEFAULT_SUBSAMPLE_SEED: u64 = 42;

/// Configuration for a full pipeline run.
///
/// # Example
///
/// ```
/// use mesh_pipeline::PipelineConfig;
/// use mesh_types::Axis;
///
/// let config = PipelineConfig::new("model.ply")
///     .with_axis(Axis::Z)
///     .with_headless(true);
/// assert_eq!(config.target_height, 1.8);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path of the input PLY model.
    pub model: PathBuf,

    /// Directory the numbered artifacts are written to.
    ///
    /// Created if missing. Default: [`DEFAULT_OUTPUT_DIR`]
    pub output_dir: PathBuf,

    /// Axis of the clip plane and the color gradient.
    ///
    /// Default: [`Axis::Y`]
    pub axis: Axis,

    /// Which side of the clip plane survives.
    ///
    /// Default: [`ClipSide::Left`]
    pub keep: ClipSide,

    /// Voxel edge length in world units.
    ///
    /// Zero means auto: the canonical bounding-box diagonal divided by
    /// [`plinth_spatial::AUTO_CELL_DIVISOR`]. Default: `0.0`
    pub voxel_size: f64,

    /// Canonical height the tallest extent is scaled to.
    ///
    /// Default: [`DEFAULT_TARGET_HEIGHT`]
    pub target_height: f64,

    /// Flip the sign of the upright quarter turn.
    ///
    /// Default: `false`
    pub invert_rotation: bool,

    /// Number of points the surface sampler is asked for.
    ///
    /// Default: [`DEFAULT_SAMPLE_COUNT`]
    pub sample_count: usize,

    /// Most voxels ever handed to the viewer at once.
    ///
    /// Default: [`DEFAULT_DISPLAY_VOXEL_CAP`]
    pub display_voxel_cap: usize,

    /// Extrema marker radius as a multiple of the voxel size.
    ///
    /// Default: [`DEFAULT_MARKER_RADIUS_SCALE`]
    pub marker_radius_scale: f64,

    /// Seed for the voxel display subsample.
    ///
    /// Default: [`DEFAULT_SUBSAMPLE_SEED`]
    pub subsample_seed: u64,

    /// Skip every viewer call, writing artifacts only.
    ///
    /// Default: `false`
    pub headless: bool,
}

impl PipelineConfig {
    /// Create a configuration for the given model with default settings.
    #[must_use]
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            axis: Axis::Y,
            keep: ClipSide::Left,
            voxel_size: 0.0,
            target_height: DEFAULT_TARGET_HEIGHT,
            invert_rotation: false,
            sample_count: DEFAULT_SAMPLE_COUNT,
            display_voxel_cap: DEFAULT_DISPLAY_VOXEL_CAP,
            marker_radius_scale: DEFAULT_MARKER_RADIUS_SCALE,
            subsample_seed: DEFAULT_SUBSAMPLE_SEED,
            headless: false,
        }
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the clip and gradient axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set which side of the clip plane survives.
    #[must_use]
    pub fn with_keep(mut self, keep: ClipSide) -> Self {
        self.keep = keep;
        self
    }

    /// Set the voxel edge length (zero for auto).
    #[must_use]
    pub fn with_voxel_size(mut self, size: f64) -> Self {
        self.voxel_size = size;
        self
    }

    /// Set the canonical target height.
    #[must_use]
    pub fn with_target_height(mut self, height: f64) -> Self {
        self.target_height = height;
        self
    }

    /// Set whether the upright quarter turn is inverted.
    #[must_use]
    pub fn with_invert_rotation(mut self, invert: bool) -> Self {
        self.invert_rotation = invert;
        self
    }

    /// Set the requested sample point count.
    #[must_use]
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the display voxel cap.
    #[must_use]
    pub fn with_display_voxel_cap(mut self, cap: usize) -> Self {
        self.display_voxel_cap = cap;
        self
    }

    /// Set the marker radius multiplier.
    #[must_use]
    pub fn with_marker_radius_scale(mut self, scale: f64) -> Self {
        self.marker_radius_scale = scale;
        self
    }

    /// Set the voxel display subsample seed.
    #[must_use]
    pub fn with_subsample_seed(mut self, seed: u64) -> Self {
        self.subsample_seed = seed;
        self
    }

    /// Set headless mode.
    #[must_use]
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Reject configurations no run could satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] when the voxel size is
    /// negative or non-finite, or the sample count is zero.
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.voxel_size.is_finite() || self.voxel_size < 0.0 {
            return Err(PipelineError::invalid_config(format!(
                "voxel size must be zero (auto) or positive, got {}",
                self.voxel_size
            )));
        }
        if self.sample_count == 0 {
            return Err(PipelineError::invalid_config(
                "sample count must be at least 1",
            ));
        }
        Ok(())
    }

    /// The voxel size a run will actually use.
    ///
    /// Explicit sizes win; zero falls back to the auto size derived
    /// from the canonical bounding-box diagonal.
    #[must_use]
    pub fn resolved_voxel_size(&self, bbox_diagonal: f64) -> f64 {
        if self.voxel_size > 0.0 {
            self.voxel_size
        } else {
            auto_cell_size(bbox_diagonal)
        }
    }

    /// Canonicalization parameters for this configuration.
    #[must_use]
    pub fn canonicalize_params(&self) -> CanonicalizeParams {
        CanonicalizeParams::default()
            .with_target_height(self.target_height)
            .with_invert_rotation(self.invert_rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plinth_spatial::AUTO_CELL_DIVISOR;

    #[test]
    fn defaults_match_documented_values() {
        let config = PipelineConfig::new("model.ply");
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.axis, Axis::Y);
        assert_eq!(config.keep, ClipSide::Left);
        assert_relative_eq!(config.voxel_size, 0.0);
        assert_relative_eq!(config.target_height, DEFAULT_TARGET_HEIGHT);
        assert!(!config.invert_rotation);
        assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(config.display_voxel_cap, DEFAULT_DISPLAY_VOXEL_CAP);
        assert!(!config.headless);
    }

    #[test]
    fn builders_chain() {
        let config = PipelineConfig::new("model.ply")
            .with_axis(Axis::Z)
            .with_keep(ClipSide::Right)
            .with_voxel_size(0.05)
            .with_sample_count(1000)
            .with_headless(true);
        assert_eq!(config.axis, Axis::Z);
        assert_eq!(config.keep, ClipSide::Right);
        assert_relative_eq!(config.voxel_size, 0.05);
        assert_eq!(config.sample_count, 1000);
        assert!(config.headless);
    }

    #[test]
    fn validate_accepts_auto_voxel_size() {
        let config = PipelineConfig::new("model.ply");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_voxel_size() {
        let config = PipelineConfig::new("model.ply").with_voxel_size(-0.1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig { .. }));
    }

    #[test]
    fn validate_rejects_nan_voxel_size() {
        let config = PipelineConfig::new("model.ply").with_voxel_size(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_sample_count() {
        let config = PipelineConfig::new("model.ply").with_sample_count(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig { .. }));
    }

    #[test]
    fn explicit_voxel_size_wins() {
        let config = PipelineConfig::new("model.ply").with_voxel_size(0.25);
        assert_relative_eq!(config.resolved_voxel_size(3.0), 0.25);
    }

    #[test]
    fn zero_voxel_size_resolves_from_diagonal() {
        let config = PipelineConfig::new("model.ply");
        assert_relative_eq!(config.resolved_voxel_size(3.0), 3.0 / AUTO_CELL_DIVISOR);
    }

    #[test]
    fn canonicalize_params_carry_config() {
        let config = PipelineConfig::new("model.ply")
            .with_target_height(2.5)
            .with_invert_rotation(true);
        let params = config.canonicalize_params();
        assert_relative_eq!(params.target_height, 2.5);
        assert!(params.invert_rotation);
    }
}
