//! Integration tests for the archai binary
//!
//! These tests run the built CLI against files in a temporary directory and
//! check both the JSON output and the files it writes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const OPEN_LAYOUT: &str = r#"{"name": "Open", "totalArea": 100,
 "rooms": [{"name": "Master Bedroom", "x": 0, "y": 0, "width": 4, "height": 4, "area": 16},
           {"name": "Kitchen", "x": 4, "y": 0, "width": 3, "height": 4, "area": 12},
           {"name": "Living", "x": 0, "y": 4, "width": 7, "height": 6, "area": 42},
           {"name": "Bath", "x": 7, "y": 0, "width": 2, "height": 3, "area": 6}]}"#;

const PROJECT: &str = r#"{"projectType": "residential",
 "siteConstraints": {"width": 18.0, "length": 12.0},
 "requiredSpaces": [{"name": "Bedroom", "quantity": 2, "minArea": 10.0},
                    {"name": "Kitchen", "quantity": 1}]}"#;

/// Run the CLI with a clean provider/config environment
fn archai(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_archai"));
    cmd.args(args)
        .env_remove("GEMINI_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env_remove("ARCHAI_PRIMARY_MODEL")
        .env_remove("ARCHAI_FALLBACK_MODEL")
        .env_remove("ARCHAI_TEMPERATURE")
        .env_remove("ARCHAI_LAYOUT_COUNT")
        .env("RUST_LOG", "off");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute archai")
}

fn json_stdout(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn square_dxf(width: f64, length: f64) -> String {
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        format!("0\nLINE\n8\n0\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n", x1, y1, x2, y2)
    };
    format!(
        "0\nSECTION\n2\nENTITIES\n{}{}{}{}0\nENDSEC\n0\nEOF\n",
        line(0.0, 0.0, width, 0.0),
        line(width, 0.0, width, length),
        line(width, length, 0.0, length),
        line(0.0, length, 0.0, 0.0)
    )
}

#[test]
fn test_render_writes_svg_file() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);
    let svg_path = dir.path().join("open.svg");

    let output = run(&mut archai(&["render", &layout, "-o", svg_path.to_str().unwrap(), "--json"]));
    assert!(output.status.success(), "render should succeed");

    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["rooms"], 4);
    assert_eq!(parsed["data"]["width"], 460.0);
    assert_eq!(parsed["data"]["height"], 500.0);

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Master Bedroom"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_render_to_stdout() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);

    let output = run(&mut archai(&["render", &layout]));
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().starts_with("<svg"));
}

#[test]
fn test_estimate_json_output() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);

    let output = run(&mut archai(&["estimate", &layout, "--json"]));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    assert_eq!(data["currency"], "INR");

    let materials = data["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 8);
    assert!((materials[0]["quantity"].as_f64().unwrap() - 15.0).abs() < 1e-9);
    assert!((materials[0]["estimatedCost"].as_f64().unwrap() - 82500.0).abs() < 1e-6);

    let sum: f64 = materials
        .iter()
        .map(|m| m["estimatedCost"].as_f64().unwrap())
        .sum();
    assert!((data["totalCost"].as_f64().unwrap() - sum).abs() < 1e-6);
}

#[test]
fn test_estimate_uses_configured_rates() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);
    let config = write(
        dir.path(),
        "archai.toml",
        "[rates]\ncurrency = \"USD\"\nconcrete_per_m3 = 100.0\n",
    );

    let output = run(&mut archai(&["estimate", &layout, "--config", &config, "--json"]));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["currency"], "USD");
    let concrete = parsed["data"]["materials"][0]["estimatedCost"].as_f64().unwrap();
    assert!((concrete - 1500.0).abs() < 1e-6);
}

#[test]
fn test_check_reports_findings() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);
    let project = write(dir.path(), "project.json", PROJECT);

    let output = run(&mut archai(&["check", "--project", &project, "--layout", &layout, "--json"]));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    let findings = data["findings"].as_array().unwrap();
    assert!(!findings.is_empty());

    let counted = data["passed"].as_u64().unwrap()
        + data["failed"].as_u64().unwrap()
        + data["warnings"].as_u64().unwrap();
    assert_eq!(counted as usize, findings.len());
    assert_eq!(data["failed"], 0);
}

#[test]
fn test_check_picks_layout_from_generated_array() {
    let dir = TempDir::new().unwrap();
    let layouts = write(
        dir.path(),
        "layouts.json",
        &format!(
            r#"[{{"name": "Tiny", "totalArea": 8, "rooms": [{{"name": "Bedroom 1", "x": 0, "y": 0, "width": 4, "height": 2, "area": 8}}]}}, {}]"#,
            OPEN_LAYOUT
        ),
    );
    let project = write(dir.path(), "project.json", PROJECT);

    let output = run(&mut archai(&[
        "check", "--project", &project, "--layout", &layouts, "--index", "1", "--json",
    ]));
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["data"]["layout"], "Open");

    let output = run(&mut archai(&[
        "check", "--project", &project, "--layout", &layouts, "--index", "5",
    ]));
    assert!(!output.status.success(), "out-of-range index should fail");
}

#[test]
fn test_check_rejects_invalid_project() {
    let dir = TempDir::new().unwrap();
    let layout = write(dir.path(), "layout.json", OPEN_LAYOUT);
    let project = write(
        dir.path(),
        "project.json",
        r#"{"projectType": "residential", "siteConstraints": {},
            "requiredSpaces": [{"name": "Bedroom", "quantity": 0}]}"#,
    );

    let output = run(&mut archai(&["check", "--project", &project, "--layout", &layout]));
    assert!(!output.status.success());
}

#[test]
fn test_import_dxf_boundary() {
    let dir = TempDir::new().unwrap();
    let dxf = write(dir.path(), "site.dxf", &square_dxf(24.0, 16.0));

    let output = run(&mut archai(&["import", &dxf, "--json"]));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    assert_eq!(data["file"], "site.dxf");
    assert_eq!(data["parsed"], true);
    assert_eq!(data["width"], 24.0);
    assert_eq!(data["length"], 16.0);
    assert_eq!(data["area"], 384.0);
}

#[test]
fn test_import_unreadable_dxf_reports_failure() {
    let dir = TempDir::new().unwrap();
    let dxf = write(dir.path(), "empty.dxf", "0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n");

    let output = run(&mut archai(&["import", &dxf, "--json"]));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    assert_eq!(data["parsed"], false);
    assert!(data["error"].is_string());
}

#[test]
fn test_import_rejects_other_formats() {
    let dir = TempDir::new().unwrap();
    let dwg = write(dir.path(), "site.dwg", "binary");

    let output = run(&mut archai(&["import", &dwg]));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Only DXF files are supported"));
}

#[test]
fn test_config_shows_sources() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "archai.toml", "primary_model = \"gemini-2.5-flash\"\n");

    let output = run(archai(&["config", "--config", &config, "--json"]).env("ARCHAI_LAYOUT_COUNT", "5"));
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    assert_eq!(data["primary_model"]["value"], "gemini-2.5-flash");
    assert_eq!(data["primary_model"]["source"], "File");
    assert_eq!(data["layout_count"]["value"], "5");
    assert_eq!(data["layout_count"]["source"], "Environment");
    assert_eq!(data["fallback_model"]["value"], "gpt-4o");
    assert_eq!(data["fallback_model"]["source"], "Default");
}

#[test]
fn test_config_missing_file_fails() {
    let output = run(&mut archai(&["config", "--config", "/nonexistent/archai.toml"]));
    assert!(!output.status.success());
}

#[test]
fn test_generate_without_providers_fails() {
    let dir = TempDir::new().unwrap();
    let project = write(dir.path(), "project.json", PROJECT);
    let out_dir = dir.path().join("out");

    let output = run(&mut archai(&["generate", &project, "--out-dir", out_dir.to_str().unwrap()]));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No generation providers configured"));
    assert!(!out_dir.join("layouts.json").exists());
}

#[test]
fn test_generate_rejects_invalid_overrides() {
    let dir = TempDir::new().unwrap();
    let project = write(dir.path(), "project.json", PROJECT);

    let output = run(&mut archai(&["generate", &project, "--count", "0"]));
    assert!(!output.status.success());

    let output = run(&mut archai(&["generate", &project, "--temperature", "3.5"]));
    assert!(!output.status.success());
}
