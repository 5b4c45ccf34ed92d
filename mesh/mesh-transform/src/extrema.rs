//! Extreme-vertex detection along a coordinate axis.
//!
//! Finds the vertices with the smallest and largest coordinate along a
//! chosen axis and describes the marker spheres a viewer should draw at
//! those spots. Building the actual marker geometry is left to the
//! caller; this module only decides position, size, and color.

use mesh_types::{Axis, IndexedMesh, Point3, VertexColor};
use tracing::debug;

use crate::error::{TransformError, TransformResult};

/// The extreme vertices of a mesh along one axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisExtrema {
    /// Index of the vertex with the smallest coordinate.
    pub min_index: usize,
    /// Index of the vertex with the largest coordinate.
    pub max_index: usize,
    /// Position of the minimal vertex.
    pub min_point: Point3<f64>,
    /// Position of the maximal vertex.
    pub max_point: Point3<f64>,
}

impl AxisExtrema {
    /// Describe the marker spheres for these extrema.
    ///
    /// Returns the minimum marker (green) first, then the maximum
    /// marker (red), both with the given radius.
    #[must_use]
    pub fn markers(&self, radius: f64) -> [ExtremaMarker; 2] {
        [
            ExtremaMarker {
                center: self.min_point,
                radius,
                color: VertexColor::GREEN,
            },
            ExtremaMarker {
                center: self.max_point,
                radius,
                color: VertexColor::RED,
            },
        ]
    }
}

/// A sphere marker to draw at an extreme vertex.
///
/// This is a description, not geometry; the pipeline's artifact builder
/// turns it into an actual sphere mesh.
#[derive(Debug, Clone, Copy)]
pub struct ExtremaMarker {
    /// Sphere center (the extreme vertex position).
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
    /// Uniform marker color.
    pub color: VertexColor,
}

/// Locate the extreme vertices of a mesh along one axis.
///
/// Ties resolve to the first occurrence in vertex order, so the result
/// is deterministic for a given mesh. A single-vertex mesh reports that
/// vertex as both extremes.
///
/// # Errors
///
/// Returns [`TransformError::EmptyMesh`] if the mesh has no vertices.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_transform::find_axis_extrema;
///
/// let extrema = find_axis_extrema(&unit_cube(), Axis::Y)?;
/// assert_eq!(extrema.min_point.y, 0.0);
/// assert_eq!(extrema.max_point.y, 1.0);
/// # Ok::<(), mesh_transform::TransformError>(())
/// ```
pub fn find_axis_extrema(mesh: &IndexedMesh, axis: Axis) -> TransformResult<AxisExtrema> {
    let first = mesh.vertices.first().ok_or(TransformError::EmptyMesh)?;

    let mut min_index = 0;
    let mut max_index = 0;
    let mut min_value = axis.component(&first.position);
    let mut max_value = min_value;

    for (index, vertex) in mesh.vertices.iter().enumerate().skip(1) {
        let value = axis.component(&vertex.position);
        if value < min_value {
            min_value = value;
            min_index = index;
        }
        if value > max_value {
            max_value = value;
            max_index = index;
        }
    }

    debug!(
        "Extrema along {}: min {:.4} at vertex {}, max {:.4} at vertex {}",
        axis, min_value, min_index, max_value, max_index
    );

    Ok(AxisExtrema {
        min_index,
        max_index,
        min_point: mesh.vertices[min_index].position,
        max_point: mesh.vertices[max_index].position,
    })
}
