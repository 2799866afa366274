//! A Z-placed group of additive and subtractive shapes

use ek_cad::{CadResult, CsgKernel, Solid};
use glam::DVec3;

use crate::bounds::Bounds;
use crate::color::Rgb;
use crate::constants::DEFAULT_COLOR;
use crate::shape::{Shape, ShapeKind};

/// Shapes sharing one Z offset
///
/// Additive shapes are unioned in insertion order, then every subtractive
/// shape is removed in insertion order. Shapes are only ever appended, and
/// the composite is recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    z_offset: f64,
    shapes: Vec<Shape>,
    color: Option<Rgb>,
}

impl Layer {
    pub fn new(z_offset: f64) -> Self {
        Self {
            z_offset,
            ..Default::default()
        }
    }

    pub fn with_color(z_offset: f64, color: Rgb) -> Self {
        Self {
            z_offset,
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Rgb>) {
        self.color = color;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape
    ///
    /// An additive shape without a color takes the layer color, or
    /// [`DEFAULT_COLOR`] when the layer has none.
    pub fn add_shape(&mut self, mut shape: Shape) {
        if shape.color.is_none() && !shape.is_subtractive() {
            shape.color = Some(self.color.unwrap_or(DEFAULT_COLOR));
        }

        tracing::trace!(
            "Added {} ({} shape, color {:?}) at Z offset {}",
            shape.name,
            shape.kind.label(),
            shape.color,
            self.z_offset
        );
        self.shapes.push(shape);
    }

    /// Create a box through `kernel` and append it
    #[allow(clippy::too_many_arguments)]
    pub fn add_cube(
        &mut self,
        kernel: &dyn CsgKernel,
        name: impl Into<String>,
        center: DVec3,
        size: DVec3,
        kind: ShapeKind,
        color: Option<Rgb>,
    ) -> CadResult<()> {
        let solid = kernel.create_box(center, size)?;
        let mut shape = Shape::new(name, kind, solid);
        shape.color = color;
        self.add_shape(shape);
        Ok(())
    }

    /// Create a cylinder (z = 0 to `height`, before the layer offset) through
    /// `kernel` and append it
    #[allow(clippy::too_many_arguments)]
    pub fn add_cylinder(
        &mut self,
        kernel: &dyn CsgKernel,
        name: impl Into<String>,
        top_radius: f64,
        bottom_radius: f64,
        height: f64,
        sides: u32,
        kind: ShapeKind,
        color: Option<Rgb>,
    ) -> CadResult<()> {
        let solid = kernel.create_cylinder(top_radius, bottom_radius, height, sides)?;
        let mut shape = Shape::new(name, kind, solid);
        shape.color = color;
        self.add_shape(shape);
        Ok(())
    }

    pub fn additive_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| !s.is_subtractive())
    }

    pub fn subtractive_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_subtractive())
    }

    /// Color used when the whole layer is drawn as one solid
    ///
    /// Shape colors do not take part; an uncolored layer draws in
    /// [`DEFAULT_COLOR`].
    pub fn display_color(&self) -> Rgb {
        self.color.unwrap_or(DEFAULT_COLOR)
    }

    /// Combine the layer's shapes into one solid at the layer's Z offset
    ///
    /// A layer with no additive shapes composes to the empty solid. Where
    /// subtractive shapes overlap, they are still applied one by one in
    /// insertion order.
    pub fn compose(&self, kernel: &dyn CsgKernel) -> CadResult<Solid> {
        let mut result = Solid::empty();
        for shape in self.additive_shapes() {
            tracing::trace!("Found additive shape: {}", shape.name);
            result = kernel.union(&result, &shape.placed(kernel, self.z_offset)?)?;
        }
        for shape in self.subtractive_shapes() {
            result = kernel.difference(&result, &shape.placed(kernel, self.z_offset)?)?;
            tracing::trace!("Applied subtractive difference: {}", shape.name);
        }

        tracing::debug!(
            "Composed layer at Z offset {} from {} shapes: {} polygons",
            self.z_offset,
            self.shapes.len(),
            result.polygon_count()
        );
        Ok(result)
    }

    /// Bounding box of every shape (additive and subtractive) after the Z offset
    ///
    /// An empty layer yields the zero box.
    pub fn bounds(&self, kernel: &dyn CsgKernel) -> CadResult<Bounds> {
        let mut points = Vec::new();
        for shape in &self.shapes {
            points.extend(shape.placed(kernel, self.z_offset)?.vertices());
        }
        Ok(Bounds::from_points(points))
    }
}
