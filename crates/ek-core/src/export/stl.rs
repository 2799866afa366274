//! STL encoding

use std::fmt::Write as _;
use std::io::Write;

use crate::mesh::Triangle;

use super::ExportError;

/// Render triangles as ASCII STL
pub fn to_ascii_stl(triangles: &[Triangle], solid_name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "solid {solid_name}");
    for tri in triangles {
        let n = tri.normal();
        let _ = writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z);
        let _ = writeln!(out, "    outer loop");
        for v in tri.vertices() {
            let _ = writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z);
        }
        let _ = writeln!(out, "    endloop");
        let _ = writeln!(out, "  endfacet");
    }
    let _ = writeln!(out, "endsolid {solid_name}");
    out
}

fn to_f32(v: glam::DVec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

/// Write triangles as binary STL
pub fn write_binary_stl<W: Write>(writer: &mut W, triangles: &[Triangle]) -> Result<(), ExportError> {
    let facets: Vec<stl_io::Triangle> = triangles
        .iter()
        .map(|tri| stl_io::Triangle {
            normal: stl_io::Normal::new(to_f32(tri.normal())),
            vertices: [
                stl_io::Vertex::new(to_f32(tri.a)),
                stl_io::Vertex::new(to_f32(tri.b)),
                stl_io::Vertex::new(to_f32(tri.c)),
            ],
        })
        .collect();

    stl_io::write_stl(writer, facets.iter()).map_err(|e| ExportError::Write(e.to_string()))
}
