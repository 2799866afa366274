//! Error types for model composition

use ek_cad::CadError;

use crate::export::ExportError;

/// Errors raised while assembling or building a model
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    #[error("No layers added")]
    NoLayers,
    #[error("Layer not found: {0}")]
    LayerNotFound(usize),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Kernel error: {0}")]
    Kernel(#[from] CadError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Result type for model operations
pub type CoreResult<T> = Result<T, CoreError>;
