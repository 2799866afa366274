//! Export options for STL output

use serde::{Deserialize, Serialize};

/// STL encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StlFormat {
    /// Human-readable `solid ... endsolid` text
    #[default]
    Ascii,
    /// 80-byte header, triangle count, 50 bytes per facet
    Binary,
}

impl StlFormat {
    pub fn name(&self) -> &'static str {
        match self {
            StlFormat::Ascii => "ASCII",
            StlFormat::Binary => "Binary",
        }
    }

    pub const ALL: &'static [StlFormat] = &[StlFormat::Ascii, StlFormat::Binary];
}

/// Export options for STL output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output encoding
    pub format: StlFormat,
    /// Name written after `solid` / `endsolid` in ASCII output
    pub solid_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: StlFormat::Ascii,
            solid_name: "model".to_string(),
        }
    }
}
