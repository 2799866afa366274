//! STL export functionality

mod options;
mod stl;

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::mesh::Triangle;

pub use options::{ExportOptions, StlFormat};
pub use stl::{to_ascii_stl, write_binary_stl};

/// Write triangles to `path`, creating missing parent directories
///
/// Failures are returned, never raised; the caller decides how to report them.
pub fn write_stl(
    triangles: &[Triangle],
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::Io(e.to_string()))?;
    }

    let file = std::fs::File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    match options.format {
        StlFormat::Ascii => writer
            .write_all(to_ascii_stl(triangles, &options.solid_name).as_bytes())
            .map_err(|e| ExportError::Write(e.to_string()))?,
        StlFormat::Binary => write_binary_stl(&mut writer, triangles)?,
    }
    writer.flush().map_err(|e| ExportError::Write(e.to_string()))?;

    tracing::info!(
        "STL file saved to: {} ({} triangles, {})",
        path.display(),
        triangles.len(),
        options.format.name()
    );
    Ok(())
}

/// Export-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Write error: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ek_cad::{CsgrsKernel, CsgKernel};
    use glam::DVec3;

    use crate::mesh::triangulate;

    fn cube_triangles() -> Vec<Triangle> {
        let kernel = CsgrsKernel::new();
        triangulate(&kernel.create_box(DVec3::ZERO, DVec3::splat(2.0)).unwrap())
    }

    #[test]
    fn test_ascii_layout() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
        let text = to_ascii_stl(&[tri], "part");
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "solid part",
                "facet normal 0 0 1",
                "outer loop",
                "vertex 0 0 0",
                "vertex 1 0 0",
                "vertex 0 1 0",
                "endloop",
                "endfacet",
                "endsolid part",
            ]
        );
    }

    #[test]
    fn test_write_ascii_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("nested").join("model.stl");

        write_stl(&cube_triangles(), &path, &ExportOptions::default()).unwrap();

        let mut file = std::fs::File::open(&path).unwrap();
        let mesh = stl_io::read_stl(&mut file).unwrap();
        assert_eq!(mesh.faces.len(), 12);
        assert_eq!(mesh.vertices.len(), 8);
    }

    #[test]
    fn test_write_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.stl");
        let options = ExportOptions {
            format: StlFormat::Binary,
            ..Default::default()
        };

        write_stl(&cube_triangles(), &path, &options).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 84 + 12 * 50);
        let mesh = stl_io::read_stl(&mut std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(mesh.faces.len(), 12);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        let result = write_stl(&cube_triangles(), dir.path(), &ExportOptions::default());
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
