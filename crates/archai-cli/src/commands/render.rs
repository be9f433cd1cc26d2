//! Render command implementation

use crate::cli::RenderArgs;
use crate::files::load_layout;
use crate::output::OutputWriter;
use crate::output_types::RenderOutput;
use anyhow::{Context, Result};
use archai_core::render::{canvas_size, render_layout};
use std::fs;

pub fn execute(args: RenderArgs, output: &OutputWriter) -> Result<()> {
    let layout = load_layout(&args.layout, args.selector.index)?;
    let svg = render_layout(&layout);
    let (width, height) = canvas_size(&layout.rooms);

    let Some(path) = args.output else {
        if output.is_json() {
            output.result(RenderOutput {
                layout: layout.name,
                rooms: layout.rooms.len(),
                width,
                height,
                output: None,
                svg: Some(svg),
            })?;
        } else {
            println!("{}", svg);
        }
        return Ok(());
    };

    fs::write(&path, &svg).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = svg.len(), "SVG written");

    if output.is_json() {
        output.result(RenderOutput {
            layout: layout.name,
            rooms: layout.rooms.len(),
            width,
            height,
            output: Some(path.display().to_string()),
            svg: None,
        })?;
    } else {
        output.success(format!(
            "Rendered '{}' ({} rooms, {}x{} px) to {}",
            layout.name,
            layout.rooms.len(),
            width,
            height,
            path.display()
        ));
    }

    Ok(())
}
