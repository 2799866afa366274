//! Layered Solid Composition
//!
//! This crate provides:
//! - Shapes tagged additive or subtractive, grouped into Z-placed layers
//! - Models that union layer composites through a [`ek_cad::CsgKernel`]
//! - Automatic color assignment from a fixed palette
//! - Fan triangulation, undirected edges and boundary-edge extraction
//! - ASCII and binary STL export
//! - Parametric sample models

pub mod bounds;
pub mod color;
pub mod constants;
pub mod edge;
pub mod error;
pub mod export;
pub mod layer;
pub mod mesh;
pub mod model;
pub mod presets;
pub mod shape;

// Re-exports for convenience
pub use bounds::Bounds;
pub use color::{Palette, Rgb};
pub use edge::{Edge, boundary_edges};
pub use error::{CoreError, CoreResult};
pub use export::{ExportError, ExportOptions, StlFormat, write_stl};
pub use layer::Layer;
pub use mesh::{ColoredTriangle, Triangle, triangulate};
pub use model::{LayerId, Model};
pub use presets::{
    FanPlateBuilder, ModelVariant, PsuEnclosureBuilder, SplitFanPlateBuilder,
};
pub use shape::{Shape, ShapeKind};
