//! Mesh file I/O for the Plinth inspection pipeline.
//!
//! This crate provides loading and saving of triangle meshes and point
//! clouds in **PLY** (Polygon File Format), the pipeline's interchange
//! format. Both ASCII and binary little-endian variants are written;
//! big-endian files are additionally accepted on load.
//!
//! Optional per-vertex normals (`nx ny nz`) and colors (`red green blue`,
//! 8-bit) round-trip through both variants; attributes are written only
//! when every vertex carries them.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_mesh, save_mesh};
//!
//! // Format detected from the .ply extension
//! let mesh = load_mesh("model.ply").unwrap();
//!
//! // Saved as binary little-endian by default
//! save_mesh(&mesh, "output.ply").unwrap();
//! ```
//!
//! Use [`save_ply`] / [`save_ply_cloud`] directly to choose between the
//! ASCII and binary variants.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod ply;

pub use error::{IoError, IoResult};
pub use ply::{load_ply, load_ply_cloud, save_ply, save_ply_cloud};

use std::path::Path;

use mesh_types::{IndexedMesh, PointCloud};

/// Supported mesh file formats.
///
/// The pipeline exchanges everything as PLY; the enum exists so the
/// dispatch layer rejects unrecognized extensions with a typed error
/// rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// PLY (Polygon File Format).
    /// Supports binary and ASCII variants.
    Ply,
}

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to check for extension
    ///
    /// # Returns
    ///
    /// The detected format, or `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "ply" => Some(Self::Ply),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Ply => "ply",
        }
    }
}

/// Detect the format of `path` or fail with `UnknownFormat`.
fn detect_format(path: &Path) -> IoResult<MeshFormat> {
    MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file, detecting format from extension.
///
/// # Arguments
///
/// * `path` - Path to the mesh file
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_mesh;
///
/// let mesh = load_mesh("model.ply").unwrap();
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    match detect_format(path)? {
        MeshFormat::Ply => load_ply(path),
    }
}

/// Save a mesh to a file, detecting format from extension.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Path for the output file
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be written
///
/// # Example
///
/// ```no_run
/// use mesh_io::{save_mesh, load_mesh};
///
/// let mesh = load_mesh("input.ply").unwrap();
/// save_mesh(&mesh, "output.ply").unwrap();
/// ```
pub fn save_mesh<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match detect_format(path)? {
        MeshFormat::Ply => save_ply(mesh, path, true), // Default to binary PLY
    }
}

/// Load a point cloud from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if the extension is unrecognized or the file cannot
/// be read.
pub fn load_point_cloud<P: AsRef<Path>>(path: P) -> IoResult<PointCloud> {
    let path = path.as_ref();
    match detect_format(path)? {
        MeshFormat::Ply => load_ply_cloud(path),
    }
}

/// Save a point cloud to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if the extension is unrecognized or the file cannot
/// be written.
pub fn save_point_cloud<P: AsRef<Path>>(cloud: &PointCloud, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match detect_format(path)? {
        MeshFormat::Ply => save_ply_cloud(cloud, path, true), // Default to binary PLY
    }
}
