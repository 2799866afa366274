//! Global constants for ek-core

use crate::color::Rgb;

/// Color given to additive shapes when neither the shape nor its layer has one
pub const DEFAULT_COLOR: Rgb = Rgb::BLUE;

/// Color used for subtractive shapes in wireframe output
pub const SUBTRACTIVE_COLOR: Rgb = Rgb::RED;

/// Default number of facets for cylinders
pub const CYLINDER_SIDES: u32 = 32;

/// Edge endpoints snap to a grid of `1 / EDGE_SNAP_SCALE` per axis
pub const EDGE_SNAP_SCALE: f64 = 1e6;
