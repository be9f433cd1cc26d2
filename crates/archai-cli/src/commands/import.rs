//! Import command implementation

use crate::cli::ImportArgs;
use crate::output::OutputWriter;
use crate::output_types::ImportOutput;
use anyhow::{bail, Context, Result};
use archai_core::formats::{BoundaryImporter, DxfBoundaryImporter};
use std::fs;

pub fn execute(args: ImportArgs, output: &OutputWriter) -> Result<()> {
    let importer = DxfBoundaryImporter;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !importer.accepts(&file_name) {
        bail!("Only DXF files are supported (got '{}')", args.file.display());
    }

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let boundary = importer.import(&bytes);

    if output.is_json() {
        return output.result(ImportOutput {
            file: file_name,
            boundary,
        });
    }

    match (boundary.dimensions(), boundary.area) {
        (Some((width, length)), Some(area)) => {
            output.section(format!("Site Boundary: {}", file_name));
            output.kv("Width", format!("{:.2} m", width));
            output.kv("Length", format!("{:.2} m", length));
            output.kv("Area", format!("{:.2} m²", area));
        }
        _ => {
            output.error(format!(
                "Could not read boundary from {}: {}",
                file_name,
                boundary.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    Ok(())
}
