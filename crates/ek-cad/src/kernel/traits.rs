//! CSG kernel trait definitions
//!
//! These traits define the interface that all CSG kernels must implement.

use glam::DVec3;
use thiserror::Error;

use crate::solid::Solid;

/// Error type for CSG kernel operations
#[derive(Debug, Clone, Error)]
pub enum CadError {
    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("Boolean operation failed: {0}")]
    BooleanFailed(String),

    #[error("Kernel not available: {0}")]
    KernelNotAvailable(String),
}

/// Result type for CSG operations
pub type CadResult<T> = Result<T, CadError>;

/// Boolean operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanType {
    /// Union (add)
    Union,
    /// Subtraction (cut)
    Subtract,
    /// Intersection (common)
    Intersect,
}

/// The main CSG kernel trait
///
/// Implementations never mutate their inputs; every operation returns a new
/// [`Solid`].
pub trait CsgKernel: Send + Sync {
    /// Get the name of this kernel
    fn name(&self) -> &str;

    /// Check if the kernel is available
    fn is_available(&self) -> bool;

    /// Create an axis-aligned box
    ///
    /// # Arguments
    /// * `center` - Box center
    /// * `size` - Full extents along X, Y and Z (all positive)
    fn create_box(&self, center: DVec3, size: DVec3) -> CadResult<Solid>;

    /// Create a cylinder or cone frustum along +Z, from z = 0 to z = `height`
    ///
    /// # Arguments
    /// * `top_radius` - Radius of the cap at z = `height`
    /// * `bottom_radius` - Radius of the cap at z = 0
    /// * `height` - Extent along Z
    /// * `sides` - Number of facets around the axis (at least 3)
    fn create_cylinder(
        &self,
        top_radius: f64,
        bottom_radius: f64,
        height: f64,
        sides: u32,
    ) -> CadResult<Solid>;

    /// Perform a boolean operation on two solids
    ///
    /// # Arguments
    /// * `a` - The first solid
    /// * `b` - The second solid
    /// * `op` - The boolean operation type
    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> CadResult<Solid>;

    /// Rigidly move a solid
    fn translate(&self, solid: &Solid, offset: DVec3) -> CadResult<Solid>;

    /// `a ∪ b`
    fn union(&self, a: &Solid, b: &Solid) -> CadResult<Solid> {
        self.boolean(a, b, BooleanType::Union)
    }

    /// `a − b`
    fn difference(&self, a: &Solid, b: &Solid) -> CadResult<Solid> {
        self.boolean(a, b, BooleanType::Subtract)
    }

    /// `a ∩ b`
    fn intersect(&self, a: &Solid, b: &Solid) -> CadResult<Solid> {
        self.boolean(a, b, BooleanType::Intersect)
    }
}

/// A null kernel that always returns errors (used when no kernel is available)
#[derive(Debug, Default)]
pub struct NullKernel;

impl CsgKernel for NullKernel {
    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn create_box(&self, _center: DVec3, _size: DVec3) -> CadResult<Solid> {
        Err(CadError::KernelNotAvailable(
            "No CSG kernel available".into(),
        ))
    }

    fn create_cylinder(
        &self,
        _top_radius: f64,
        _bottom_radius: f64,
        _height: f64,
        _sides: u32,
    ) -> CadResult<Solid> {
        Err(CadError::KernelNotAvailable(
            "No CSG kernel available".into(),
        ))
    }

    fn boolean(&self, _a: &Solid, _b: &Solid, _op: BooleanType) -> CadResult<Solid> {
        Err(CadError::KernelNotAvailable(
            "No CSG kernel available".into(),
        ))
    }

    fn translate(&self, _solid: &Solid, _offset: DVec3) -> CadResult<Solid> {
        Err(CadError::KernelNotAvailable(
            "No CSG kernel available".into(),
        ))
    }
}

/// Get the default CSG kernel
pub fn default_kernel() -> Box<dyn CsgKernel> {
    Box::new(super::CsgrsKernel::new())
}
