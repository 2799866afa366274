//! CSG kernel abstraction
//!
//! Provides a unified interface over boolean-geometry backends:
//! - csgrs: BSP polygon CSG from the `csgrs` crate (default)
//! - Null: every call fails, used to exercise error paths

mod csgrs_backend;
mod traits;

pub use csgrs_backend::CsgrsKernel;
pub use traits::*;
