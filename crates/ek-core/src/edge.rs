//! Undirected edges with tolerance-based identity and boundary extraction

use std::collections::HashSet;

use glam::DVec3;

use crate::constants::EDGE_SNAP_SCALE;
use crate::mesh::Triangle;

/// Integer grid cell of a point
type GridKey = [i64; 3];

/// An undirected segment between two points
///
/// Endpoints are snapped to a grid of [`EDGE_SNAP_SCALE`] cells per unit and
/// stored in lexicographic (x, y, z) order, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same edge. Equality and hashing both use the
/// snapped cells, so equal edges always hash equal. Points closer than one
/// cell still land in different cells when they straddle a cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    p1: GridKey,
    p2: GridKey,
}

impl Edge {
    pub fn new(a: DVec3, b: DVec3) -> Self {
        let (a, b) = (snap(a), snap(b));
        if a <= b {
            Self { p1: a, p2: b }
        } else {
            Self { p1: b, p2: a }
        }
    }

    /// Lexicographically smaller endpoint, on the snap grid
    pub fn start(&self) -> DVec3 {
        unsnap(self.p1)
    }

    /// Lexicographically larger endpoint, on the snap grid
    pub fn end(&self) -> DVec3 {
        unsnap(self.p2)
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

fn snap(p: DVec3) -> GridKey {
    [
        (p.x * EDGE_SNAP_SCALE).round() as i64,
        (p.y * EDGE_SNAP_SCALE).round() as i64,
        (p.z * EDGE_SNAP_SCALE).round() as i64,
    ]
}

fn unsnap(key: GridKey) -> DVec3 {
    DVec3::new(key[0] as f64, key[1] as f64, key[2] as f64) / EDGE_SNAP_SCALE
}

/// The three edges of a triangle
pub fn triangle_edges(triangle: &Triangle) -> [Edge; 3] {
    [
        Edge::new(triangle.a, triangle.b),
        Edge::new(triangle.b, triangle.c),
        Edge::new(triangle.c, triangle.a),
    ]
}

/// Edges used by exactly one triangle
///
/// Interior edges shared by two or more triangles are dropped, which leaves
/// the silhouette and hole outlines of a triangle soup. The result does not
/// depend on triangle order.
pub fn boundary_edges(triangles: &[Triangle]) -> HashSet<Edge> {
    let mut seen_once = HashSet::new();
    let mut seen_multiple = HashSet::new();

    for edge in triangles.iter().flat_map(triangle_edges) {
        if !seen_multiple.contains(&edge) && !seen_once.insert(edge) {
            seen_once.remove(&edge);
            seen_multiple.insert(edge);
        }
    }

    tracing::trace!(
        "{} boundary edges, {} shared edges from {} triangles",
        seen_once.len(),
        seen_multiple.len(),
        triangles.len()
    );
    seen_once
}
