//! Immutable solid handle

use std::sync::Arc;

use csgrs::csg::CSG;
use glam::DVec3;

/// An immutable boundary representation made of convex planar polygons
///
/// Cloning is cheap; all clones share the same `csgrs` mesh.
#[derive(Debug, Clone)]
pub struct Solid {
    csg: Arc<CSG<()>>,
}

impl Default for Solid {
    fn default() -> Self {
        Self::from_csg(CSG::new())
    }
}

impl Solid {
    /// The explicit empty solid (no faces)
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_csg(csg: CSG<()>) -> Self {
        Self { csg: Arc::new(csg) }
    }

    pub(crate) fn csg(&self) -> &CSG<()> {
        &self.csg
    }

    /// All faces, each an ordered vertex loop wound counter-clockwise from outside
    pub fn faces(&self) -> impl Iterator<Item = Vec<DVec3>> + '_ {
        self.csg.polygons.iter().map(|polygon| {
            polygon
                .vertices
                .iter()
                .map(|v| DVec3::new(v.pos.x, v.pos.y, v.pos.z))
                .collect()
        })
    }

    /// Number of faces
    pub fn polygon_count(&self) -> usize {
        self.csg.polygons.len()
    }

    /// Check if the solid has no faces
    pub fn is_empty(&self) -> bool {
        self.csg.polygons.is_empty()
    }

    /// Iterate every vertex of every face
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.csg
            .polygons
            .iter()
            .flat_map(|polygon| polygon.vertices.iter())
            .map(|v| DVec3::new(v.pos.x, v.pos.y, v.pos.z))
    }

    /// Check that every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.vertices().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_solid() {
        let solid = Solid::empty();
        assert!(solid.is_empty());
        assert_eq!(solid.polygon_count(), 0);
        assert_eq!(solid.vertices().count(), 0);
        assert!(solid.is_finite());
    }

    #[test]
    fn test_faces_follow_mesh() {
        let solid = Solid::from_csg(CSG::cube(1.0, 2.0, 3.0, None));
        assert_eq!(solid.polygon_count(), 6);
        assert!(solid.faces().all(|face| face.len() == 4));

        let max = solid.vertices().fold(DVec3::ZERO, DVec3::max);
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_clones_share_storage() {
        let solid = Solid::from_csg(CSG::cube(1.0, 1.0, 1.0, None));
        let copy = solid.clone();
        assert!(std::ptr::eq(solid.csg(), copy.csg()));
    }
}
