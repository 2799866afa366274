//! Named additive or subtractive solids

use ek_cad::{CadResult, CsgKernel, Solid};
use glam::DVec3;

use crate::color::Rgb;

/// How a shape contributes to its layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    /// Unioned into the layer
    #[default]
    Additive,
    /// Removed from the layer after all additive shapes are unioned
    Subtractive,
}

impl ShapeKind {
    pub fn is_subtractive(self) -> bool {
        self == ShapeKind::Subtractive
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Additive => "additive",
            ShapeKind::Subtractive => "subtractive",
        }
    }
}

/// A named solid in layer-local coordinates
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: String,
    pub kind: ShapeKind,
    /// Display color; only meaningful for additive shapes
    pub color: Option<Rgb>,
    pub solid: Solid,
}

impl Shape {
    pub fn new(name: impl Into<String>, kind: ShapeKind, solid: Solid) -> Self {
        Self {
            name: name.into(),
            kind,
            color: None,
            solid,
        }
    }

    pub fn additive(name: impl Into<String>, solid: Solid) -> Self {
        Self::new(name, ShapeKind::Additive, solid)
    }

    pub fn subtractive(name: impl Into<String>, solid: Solid) -> Self {
        Self::new(name, ShapeKind::Subtractive, solid)
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_subtractive(&self) -> bool {
        self.kind.is_subtractive()
    }

    /// The solid lifted to a layer's Z offset
    pub fn placed(&self, kernel: &dyn CsgKernel, z_offset: f64) -> CadResult<Solid> {
        kernel.translate(&self.solid, DVec3::new(0.0, 0.0, z_offset))
    }
}
