//! Ordered stack of layers composed into one solid

use std::path::Path;

use ek_cad::{CsgKernel, Solid};

use crate::bounds::Bounds;
use crate::color::{Palette, Rgb};
use crate::constants::SUBTRACTIVE_COLOR;
use crate::error::{CoreError, CoreResult};
use crate::export::{ExportOptions, write_stl};
use crate::layer::Layer;
use crate::mesh::{ColoredTriangle, triangulate};
use crate::shape::Shape;

/// Index of a layer within its [`Model`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// A layered solid model
///
/// Holds no rendering state; triangles for display are derived on demand.
#[derive(Debug, Clone, Default)]
pub struct Model {
    layers: Vec<Layer>,
    palette: Palette,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Append an empty, uncolored layer
    pub fn add_layer(&mut self, z_offset: f64) -> LayerId {
        self.push_layer(Layer::new(z_offset))
    }

    /// Append an existing layer
    pub fn push_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer);
        tracing::trace!("Added layer (total layers: {})", self.layers.len());
        LayerId(self.layers.len() - 1)
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0)
    }

    /// Take the next palette color
    pub fn next_color(&mut self) -> Rgb {
        self.palette.next_color()
    }

    /// Append a shape to a layer, assigning a color if it needs one
    ///
    /// An additive shape without a color takes the layer color; if the layer
    /// has none either, it takes the next palette color. Colors are fixed
    /// here, so repeated builds render identically.
    pub fn add_shape(&mut self, id: LayerId, mut shape: Shape) -> CoreResult<()> {
        let layer = self
            .layers
            .get_mut(id.0)
            .ok_or(CoreError::LayerNotFound(id.0))?;

        if shape.color.is_none() && !shape.is_subtractive() {
            let color = match layer.color() {
                Some(color) => color,
                None => self.palette.next_color(),
            };
            shape.color = Some(color);
        }
        layer.add_shape(shape);
        Ok(())
    }

    /// Union every layer composite, in layer order
    pub fn build(&self, kernel: &dyn CsgKernel) -> CoreResult<Solid> {
        let (first, rest) = self.layers.split_first().ok_or(CoreError::NoLayers)?;

        tracing::debug!("Building combined solid from {} layers", self.layers.len());
        let mut result = first.compose(kernel)?;
        for layer in rest {
            result = kernel.union(&result, &layer.compose(kernel)?)?;
        }

        tracing::debug!("Combined solid complete: {} polygons", result.polygon_count());
        Ok(result)
    }

    /// Bounding box of the composed layers (zero box when nothing is composed)
    pub fn bounds(&self, kernel: &dyn CsgKernel) -> CoreResult<Bounds> {
        let mut points = Vec::new();
        for layer in &self.layers {
            points.extend(layer.compose(kernel)?.vertices());
        }
        Ok(Bounds::from_points(points))
    }

    /// Triangles of each layer composite, in the layer's display color
    pub fn solid_triangles(&self, kernel: &dyn CsgKernel) -> CoreResult<Vec<ColoredTriangle>> {
        let mut out = Vec::new();
        for layer in &self.layers {
            let color = layer.display_color();
            let composite = layer.compose(kernel)?;
            out.extend(
                triangulate(&composite)
                    .into_iter()
                    .map(|t| ColoredTriangle::new(t, color, false)),
            );
        }
        Ok(out)
    }

    /// Triangles of every shape on its own, subtractive shapes tagged
    pub fn wireframe_triangles(&self, kernel: &dyn CsgKernel) -> CoreResult<Vec<ColoredTriangle>> {
        let mut out = Vec::new();
        for layer in &self.layers {
            let color = layer.display_color();
            for shape in layer.additive_shapes() {
                let solid = shape.placed(kernel, layer.z_offset())?;
                out.extend(
                    triangulate(&solid)
                        .into_iter()
                        .map(|t| ColoredTriangle::new(t, color, false)),
                );
            }
            for shape in layer.subtractive_shapes() {
                let solid = shape.placed(kernel, layer.z_offset())?;
                out.extend(
                    triangulate(&solid)
                        .into_iter()
                        .map(|t| ColoredTriangle::new(t, SUBTRACTIVE_COLOR, true)),
                );
            }
        }
        Ok(out)
    }

    /// Build the model and write it as STL
    pub fn export_stl(
        &self,
        kernel: &dyn CsgKernel,
        path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> CoreResult<()> {
        let solid = self.build(kernel)?;
        write_stl(&triangulate(&solid), path, options)?;
        Ok(())
    }
}
