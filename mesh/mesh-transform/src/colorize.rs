//! Scalar-field colorization along a coordinate axis.
//!
//! Paints every vertex by where its chosen coordinate sits between the
//! mesh-wide minimum and maximum: red for high, blue for low, nothing
//! in the green channel. The result reads as a temperature map of the
//! axis.

use std::fmt;

use mesh_types::{Axis, IndexedMesh, VertexColor};
use tracing::debug;

/// Coordinate spreads below this are treated as degenerate.
///
/// Dividing by a near-zero spread would blow small float noise up into
/// full-range color swings; instead every vertex maps to normalized
/// value 0.
pub const DEGENERATE_SPREAD: f64 = 1e-6;

/// Summary of a colorization pass.
#[derive(Debug, Clone, Copy)]
pub struct GradientSummary {
    /// The axis that drove the gradient.
    pub axis: Axis,
    /// Smallest coordinate value seen.
    pub min_value: f64,
    /// Largest coordinate value seen.
    pub max_value: f64,
    /// Whether the spread was below [`DEGENERATE_SPREAD`].
    pub degenerate: bool,
}

impl fmt::Display for GradientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degenerate {
            write!(f, "Gradient along {}: degenerate range", self.axis)
        } else {
            write!(
                f,
                "Gradient along {}: [{:.3}, {:.3}]",
                self.axis, self.min_value, self.max_value
            )
        }
    }
}

/// Paint a red/blue gradient along one coordinate axis.
///
/// Each vertex's coordinate is normalized linearly to `t` in `[0, 1]`
/// over the mesh-wide range, then colored `(t, 0, 1 - t)`: the lowest
/// vertex comes out pure blue, the highest pure red. Any existing
/// colors are overwritten.
///
/// If the range spread is below [`DEGENERATE_SPREAD`], every vertex
/// maps to `t = 0` and the whole mesh is painted blue; this is reported
/// in the summary rather than treated as an error.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis, VertexColor};
/// use mesh_transform::colorize_by_axis;
///
/// let mut mesh = unit_cube();
/// let summary = colorize_by_axis(&mut mesh, Axis::Y);
///
/// assert!(!summary.degenerate);
/// assert_eq!(mesh.vertices[0].color(), Some(VertexColor::BLUE)); // y = 0
/// ```
pub fn colorize_by_axis(mesh: &mut IndexedMesh, axis: Axis) -> GradientSummary {
    if mesh.vertices.is_empty() {
        return GradientSummary {
            axis,
            min_value: 0.0,
            max_value: 0.0,
            degenerate: true,
        };
    }

    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    for vertex in &mesh.vertices {
        let value = axis.component(&vertex.position);
        min_value = min_value.min(value);
        max_value = max_value.max(value);
    }

    let spread = max_value - min_value;
    let degenerate = spread < DEGENERATE_SPREAD;
    if degenerate {
        debug!(
            "Coordinate spread {:.2e} along {} is degenerate, painting flat",
            spread, axis
        );
    }

    for vertex in &mut mesh.vertices {
        let t = if degenerate {
            0.0
        } else {
            (axis.component(&vertex.position) - min_value) / spread
        };
        vertex.attributes.color = Some(VertexColor::from_float(t, 0.0, 1.0 - t));
    }

    GradientSummary {
        axis,
        min_value,
        max_value,
        degenerate,
    }
}
