//! DXF boundary reader
//!
//! Only top-level `LINE` entities contribute to the boundary, matching how
//! site outlines are usually exported from CAD tools. Lines inside block
//! definitions are ignored.

use dxf::entities::EntityType;
use dxf::Drawing;
use geo::{BoundingRect, LineString, MultiLineString};

use super::{BoundaryImport, BoundaryImporter};

/// Boundary importer for DXF drawings (ASCII or binary)
#[derive(Debug, Clone, Copy, Default)]
pub struct DxfBoundaryImporter;

impl BoundaryImporter for DxfBoundaryImporter {
    fn import(&self, bytes: &[u8]) -> BoundaryImport {
        match read_boundary(bytes) {
            Ok((width, length)) => BoundaryImport::parsed(width, length),
            Err(reason) => {
                tracing::error!(error = %reason, "DXF parsing error");
                BoundaryImport::failed(reason)
            }
        }
    }

    fn supported_extension(&self) -> &str {
        "dxf"
    }
}

/// Width and length of the bounding box around all LINE entities
fn read_boundary(bytes: &[u8]) -> Result<(f64, f64), String> {
    let mut reader = bytes;
    let drawing =
        Drawing::load(&mut reader).map_err(|e| format!("Failed to read DXF drawing: {}", e))?;

    let outline: MultiLineString<f64> = drawing
        .entities()
        .filter_map(|entity| match &entity.specific {
            EntityType::Line(line) => Some(LineString::from(vec![
                (line.p1.x, line.p1.y),
                (line.p2.x, line.p2.y),
            ])),
            _ => None,
        })
        .collect();

    if outline.0.is_empty() {
        return Err("No LINE entities found in drawing".to_string());
    }

    let rect = outline
        .bounding_rect()
        .ok_or_else(|| "Drawing has no extent".to_string())?;

    Ok((rect.width(), rect.height()))
}
