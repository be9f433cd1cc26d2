//! Generate command implementation

use crate::cli::GenerateArgs;
use crate::files::load_project_config;
use crate::output::OutputWriter;
use crate::output_types::{GenerateOutput, GeneratedLayoutInfo};
use anyhow::{bail, Context, Result};
use archai_core::config::{CliConfigOverrides, LayeredConfig};
use archai_core::error::ArchaiError;
use archai_core::models::Layout;
use archai_llm::LayoutGenerator;
use std::fs;
use std::path::Path;
use tabled::Tabled;

const LAYOUTS_FILE: &str = "layouts.json";

#[derive(Tabled)]
struct LayoutRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rooms")]
    rooms: usize,
    #[tabled(rename = "Area (m²)")]
    area: String,
    #[tabled(rename = "Drawing")]
    svg_file: String,
}

pub async fn execute(
    args: GenerateArgs,
    mut config: LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    config.update_from_cli(CliConfigOverrides {
        primary_model: args.primary_model,
        fallback_model: args.fallback_model,
        temperature: args.temperature,
        layout_count: args.count,
    });

    let project = load_project_config(&args.project)?;

    let generator = LayoutGenerator::from_env(&config);
    let providers: Vec<String> = generator
        .provider_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    if providers.is_empty() {
        bail!("No generation providers configured; set GEMINI_API_KEY or OPENAI_API_KEY");
    }

    if !output.is_json() {
        output.info(format!(
            "Requesting {} layout(s) from {}",
            generator.layout_count(),
            providers.join(" → ")
        ));
    }

    let layouts = match generator.generate(&project).await {
        Ok(layouts) => layouts,
        Err(ArchaiError::GenerationFailed { attempts }) => {
            for attempt in &attempts {
                output.error(attempt);
            }
            bail!("AI generation failed after {} attempt(s)", attempts.len());
        }
        Err(e) => return Err(e.into()),
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let layouts_file = args.out_dir.join(LAYOUTS_FILE);
    let json = serde_json::to_string_pretty(&layouts)?;
    fs::write(&layouts_file, json)
        .with_context(|| format!("Failed to write {}", layouts_file.display()))?;

    let written = write_drawings(&layouts, &args.out_dir)?;

    tracing::info!(
        layouts = layouts.len(),
        out_dir = %args.out_dir.display(),
        "Generated layouts written"
    );

    if output.is_json() {
        return output.result(GenerateOutput {
            providers,
            layouts: written,
            layouts_file: layouts_file.display().to_string(),
        });
    }

    if layouts.is_empty() {
        output.warning("The model returned no layouts");
        return Ok(());
    }

    output.section("Generated Layouts");
    output.table(
        written
            .into_iter()
            .enumerate()
            .map(|(idx, info)| LayoutRow {
                index: idx,
                name: info.name,
                rooms: info.rooms,
                area: format!("{:.2}", info.total_area),
                svg_file: info.svg_file,
            })
            .collect(),
    );
    output.success(format!("Layouts saved to {}", layouts_file.display()));

    Ok(())
}

/// Write `layout-N.svg` for every layout, numbered from 1
fn write_drawings(layouts: &[Layout], out_dir: &Path) -> Result<Vec<GeneratedLayoutInfo>> {
    layouts
        .iter()
        .enumerate()
        .map(|(idx, layout)| {
            let path = out_dir.join(format!("layout-{}.svg", idx + 1));
            fs::write(&path, &layout.svg_content)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            Ok(GeneratedLayoutInfo {
                name: layout.name.clone(),
                rooms: layout.rooms.len(),
                total_area: layout.total_area,
                svg_file: path.display().to_string(),
            })
        })
        .collect()
}
