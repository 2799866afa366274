//! Frame assembly: faces, edges, reference geometry, overlay

use ek_core::Rgb;
use ek_core::edge::triangle_edges;
use glam::{DVec3, IVec2};

use crate::config::RendererConfig;
use crate::projection::Projector;
use crate::scene::Scene;
use crate::shading::shade;
use crate::surface::Surface;
use crate::view::{RenderMode, ViewParams};

/// Draws a [`Scene`] onto any [`Surface`]
///
/// Triangles are painted in scene order with no depth test, so overlapping
/// geometry is resolved by draw order alone.
#[derive(Debug, Clone, Default)]
pub struct SoftwareRenderer {
    config: RendererConfig,
}

impl SoftwareRenderer {
    /// Renderer using `config`
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Replace the configuration
    pub fn set_config(&mut self, config: RendererConfig) {
        self.config = config;
    }

    /// Draw one frame
    pub fn render(&self, scene: &Scene, params: &ViewParams, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        let projector = Projector::new(params.pitch, params.yaw, params.scale, width, height);

        surface.clear(self.config.colors.background);

        match params.mode {
            RenderMode::Solid => {
                self.draw_faces(scene, params, &projector, surface);
                if params.show_edges {
                    self.draw_outline(scene, &projector, surface);
                }
            }
            RenderMode::Wireframe => self.draw_wireframe(scene, &projector, surface),
        }

        self.draw_origin(&projector, surface);
        if params.show_axes {
            self.draw_axes(&projector, surface);
        }

        let [x, y] = self.config.reference.overlay_position;
        surface.draw_text(IVec2::new(x, y), &params.overlay_text(), self.config.colors.overlay_text);
    }

    fn draw_faces(
        &self,
        scene: &Scene,
        params: &ViewParams,
        projector: &Projector,
        surface: &mut dyn Surface,
    ) {
        let light = DVec3::from_array(self.config.lighting.direction).normalize_or_zero();
        let ambient = self.config.lighting.ambient;

        for colored in scene.triangles() {
            let triangle = &colored.triangle;
            let color = if params.show_shading {
                shade(colored.color, triangle.normal(), light, ambient)
            } else {
                colored.color
            };
            let points = triangle.vertices().map(|v| projector.project(v));
            surface.fill_triangle(points, color);
        }
    }

    fn draw_wireframe(&self, scene: &Scene, projector: &Projector, surface: &mut dyn Surface) {
        let colors = &self.config.colors;
        for colored in scene.triangles() {
            let color = if colored.subtractive {
                colors.subtractive_edge
            } else {
                colors.additive_edge
            };
            for edge in triangle_edges(&colored.triangle) {
                line(projector, surface, edge.start(), edge.end(), color);
            }
        }
    }

    fn draw_outline(&self, scene: &Scene, projector: &Projector, surface: &mut dyn Surface) {
        for edge in scene.outline() {
            line(projector, surface, edge.start(), edge.end(), self.config.colors.outline);
        }
    }

    fn draw_origin(&self, projector: &Projector, surface: &mut dyn Surface) {
        let origin = projector.project(DVec3::ZERO);
        let d = self.config.reference.marker_size;
        let color = self.config.colors.origin_marker;
        surface.draw_line(origin + IVec2::new(-d, -d), origin + IVec2::new(d, d), color);
        surface.draw_line(origin + IVec2::new(-d, d), origin + IVec2::new(d, -d), color);
    }

    fn draw_axes(&self, projector: &Projector, surface: &mut dyn Surface) {
        let length = self.config.reference.axis_length;
        let colors = &self.config.colors;
        for (axis, color) in [
            (DVec3::X, colors.x_axis),
            (DVec3::Y, colors.y_axis),
            (DVec3::Z, colors.z_axis),
        ] {
            line(projector, surface, DVec3::ZERO, axis * length, color);
        }
    }
}

fn line(projector: &Projector, surface: &mut dyn Surface, from: DVec3, to: DVec3, color: Rgb) {
    surface.draw_line(projector.project(from), projector.project(to), color);
}
