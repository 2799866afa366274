//! Triangle soup produced from kernel solids

use ek_cad::Solid;
use glam::DVec3;

use crate::color::Rgb;

/// A triangle with counter-clockwise winding seen from outside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: DVec3,
    pub b: DVec3,
    pub c: DVec3,
}

impl Triangle {
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Unit normal by the right-hand rule on `(b - a) × (c - a)`
    ///
    /// Degenerate triangles return the zero vector.
    pub fn normal(&self) -> DVec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}

/// A triangle tagged with its display color and origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredTriangle {
    pub triangle: Triangle,
    pub color: Rgb,
    /// Produced from a subtractive shape (wireframe only)
    pub subtractive: bool,
}

impl ColoredTriangle {
    pub fn new(triangle: Triangle, color: Rgb, subtractive: bool) -> Self {
        Self {
            triangle,
            color,
            subtractive,
        }
    }
}

/// Fan-triangulate every face of `solid` from its first vertex
///
/// Faces with fewer than three vertices are skipped.
pub fn triangulate(solid: &Solid) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for vertices in solid.faces() {
        if vertices.len() < 3 {
            continue;
        }
        let v0 = vertices[0];
        for pair in vertices[1..].windows(2) {
            triangles.push(Triangle::new(v0, pair[0], pair[1]));
        }
    }
    triangles
}
