use archai_core::config::{parse_layout_count, parse_temperature};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ArchAI - AI-assisted floor plan generation
#[derive(Parser, Debug)]
#[command(name = "archai")]
#[command(about = "Generate, render and evaluate floor plan layouts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a layout as an SVG drawing
    Render(RenderArgs),

    /// Evaluate a layout against the project's rules
    Check(CheckArgs),

    /// Estimate the bill of materials for a layout
    Estimate(EstimateArgs),

    /// Read site dimensions from a DXF boundary drawing
    Import(ImportArgs),

    /// Generate layouts for a project with the configured AI providers
    Generate(GenerateArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

/// Which layout to read from a file holding several
#[derive(Args, Debug, Clone, Copy)]
pub struct LayoutSelector {
    /// Index of the layout when the file holds an array of layouts
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Layout JSON file
    pub layout: PathBuf,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub selector: LayoutSelector,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project configuration JSON file
    #[arg(long)]
    pub project: PathBuf,

    /// Layout JSON file
    #[arg(long)]
    pub layout: PathBuf,

    #[command(flatten)]
    pub selector: LayoutSelector,
}

#[derive(Parser, Debug)]
pub struct EstimateArgs {
    /// Layout JSON file
    pub layout: PathBuf,

    #[command(flatten)]
    pub selector: LayoutSelector,
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// DXF drawing of the site boundary
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Project configuration JSON file
    pub project: PathBuf,

    /// Directory for layouts.json and the rendered SVG files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Number of layouts to request
    #[arg(long, value_parser = parse_layout_count)]
    pub count: Option<u32>,

    /// Override the primary model
    #[arg(long)]
    pub primary_model: Option<String>,

    /// Override the fallback model
    #[arg(long)]
    pub fallback_model: Option<String>,

    /// Sampling temperature for the fallback provider (0 to 2)
    #[arg(long, value_parser = parse_temperature)]
    pub temperature: Option<f32>,
}
