//! Boundary drawing import
//!
//! An importer turns the raw bytes of an uploaded site drawing into the
//! site's bounding-box dimensions. Importers never fail outright: a drawing
//! that cannot be read yields a `parsed: false` result carrying the reason.

use serde::{Deserialize, Serialize};

pub mod dxf;

pub use dxf::DxfBoundaryImporter;

/// Port for extracting site dimensions from a boundary drawing
pub trait BoundaryImporter: Send + Sync {
    /// Extract the bounding box of the drawing
    fn import(&self, bytes: &[u8]) -> BoundaryImport;

    /// File extension this importer understands, without the dot
    fn supported_extension(&self) -> &str;

    /// Check whether a file name carries the supported extension
    fn accepts(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case(self.supported_extension()))
            .unwrap_or(false)
    }
}

/// Result of a boundary import
///
/// Serializes as `{parsed: true, width, length, area}` or
/// `{parsed: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryImport {
    pub parsed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoundaryImport {
    pub fn parsed(width: f64, length: f64) -> Self {
        Self {
            parsed: true,
            width: Some(width),
            length: Some(length),
            area: Some(width * length),
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            parsed: false,
            width: None,
            length: None,
            area: None,
            error: Some(reason.into()),
        }
    }

    /// Width and length when the import succeeded
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        match (self.parsed, self.width, self.length) {
            (true, Some(width), Some(length)) => Some((width, length)),
            _ => None,
        }
    }
}
