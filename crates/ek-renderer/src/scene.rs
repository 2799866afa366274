//! Triangulated model ready for drawing

use ek_cad::CsgKernel;
use ek_core::{ColoredTriangle, CoreResult, Edge, Model, boundary_edges};

use crate::view::RenderMode;

/// Triangles for one render mode, plus the outline of the additive ones
///
/// Rebuilt when the model or the render mode changes; camera moves reuse it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    mode: RenderMode,
    triangles: Vec<ColoredTriangle>,
    outline: Vec<Edge>,
}

impl Scene {
    /// Triangulate `model` for `mode`
    ///
    /// Solid mode uses each layer composite; wireframe mode uses every shape
    /// on its own.
    pub fn build(model: &Model, kernel: &dyn CsgKernel, mode: RenderMode) -> CoreResult<Self> {
        let triangles = match mode {
            RenderMode::Solid => model.solid_triangles(kernel)?,
            RenderMode::Wireframe => model.wireframe_triangles(kernel)?,
        };

        Ok(Self::from_triangles(mode, triangles))
    }

    /// Wrap already triangulated geometry, deriving its outline
    pub fn from_triangles(mode: RenderMode, triangles: Vec<ColoredTriangle>) -> Self {
        let additive: Vec<_> = triangles
            .iter()
            .filter(|t| !t.subtractive)
            .map(|t| t.triangle)
            .collect();
        let outline: Vec<Edge> = boundary_edges(&additive).into_iter().collect();

        tracing::debug!(
            "Built {} scene: {} triangles, {} boundary edges",
            mode.name(),
            triangles.len(),
            outline.len()
        );
        Self {
            mode,
            triangles,
            outline,
        }
    }

    /// Mode the triangles were built for
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Triangles in draw order
    pub fn triangles(&self) -> &[ColoredTriangle] {
        &self.triangles
    }

    /// Edges used by exactly one additive triangle
    pub fn outline(&self) -> &[Edge] {
        &self.outline
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ek_cad::{CsgrsKernel, NullKernel, Solid};
    use ek_core::{Rgb, Shape, ShapeKind, Triangle};
    use glam::DVec3;

    fn plate_with_hole(kernel: &CsgrsKernel) -> Model {
        let mut model = Model::new();
        let id = model.add_layer(0.0);
        let layer = model.layer_mut(id).unwrap();
        layer
            .add_cube(kernel, "Plate", DVec3::ZERO, DVec3::new(10.0, 10.0, 2.0), ShapeKind::Additive, None)
            .unwrap();
        layer
            .add_cube(kernel, "Hole", DVec3::ZERO, DVec3::new(2.0, 2.0, 4.0), ShapeKind::Subtractive, None)
            .unwrap();
        model
    }

    #[test]
    fn test_solid_scene_is_additive_only() {
        let kernel = CsgrsKernel::new();
        let scene = Scene::build(&plate_with_hole(&kernel), &kernel, RenderMode::Solid).unwrap();
        assert_eq!(scene.mode(), RenderMode::Solid);
        assert!(!scene.is_empty());
        assert!(scene.triangles().iter().all(|t| !t.subtractive));
    }

    #[test]
    fn test_wireframe_keeps_subtractive_shapes() {
        let kernel = CsgrsKernel::new();
        let scene = Scene::build(&plate_with_hole(&kernel), &kernel, RenderMode::Wireframe).unwrap();
        assert_eq!(scene.mode(), RenderMode::Wireframe);
        assert_eq!(scene.triangles().len(), 24);
        assert_eq!(scene.triangles().iter().filter(|t| t.subtractive).count(), 12);
        // Both boxes are closed; the subtractive one is excluded anyway
        assert!(scene.outline().is_empty());
    }

    #[test]
    fn test_closed_box_has_no_outline() {
        let kernel = CsgrsKernel::new();
        let mut model = Model::new();
        let id = model.add_layer(0.0);
        model
            .add_shape(id, Shape::additive("Plate", kernel.create_box(DVec3::ZERO, DVec3::ONE).unwrap()))
            .unwrap();
        let scene = Scene::build(&model, &kernel, RenderMode::Solid).unwrap();
        assert_eq!(scene.triangles().len(), 12);
        assert!(scene.outline().is_empty());

        let empty = Scene::build(&Model::new(), &kernel, RenderMode::Solid).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_triangles_outlines_additive_only() {
        let triangle = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
        let scene = Scene::from_triangles(
            RenderMode::Solid,
            vec![
                ColoredTriangle::new(triangle, Rgb::BLUE, false),
                ColoredTriangle::new(
                    Triangle::new(DVec3::Z, DVec3::X, DVec3::Y),
                    Rgb::RED,
                    true,
                ),
            ],
        );
        assert_eq!(scene.triangles().len(), 2);
        assert_eq!(scene.outline().len(), 3);
        assert!(scene.outline().iter().all(|e| e.start().z == 0.0 && e.end().z == 0.0));
    }

    #[test]
    fn test_kernel_failure() {
        let mut model = Model::new();
        let id = model.add_layer(0.0);
        model.add_shape(id, Shape::additive("A", Solid::empty())).unwrap();
        assert!(Scene::build(&model, &NullKernel, RenderMode::Solid).is_err());
    }
}
