//! Geometry Kernel Abstraction
//!
//! This crate provides:
//! - The [`CsgKernel`] trait consumed by the layered composition model
//! - An immutable, cheaply clonable [`Solid`] backed by a `csgrs` mesh
//! - A `csgrs` polygon CSG backend ([`CsgrsKernel`])
//! - A [`NullKernel`] that rejects every operation

pub mod kernel;
pub mod solid;

// Re-exports for convenience
pub use kernel::{BooleanType, CadError, CadResult, CsgKernel, CsgrsKernel, NullKernel, default_kernel};
pub use solid::Solid;
