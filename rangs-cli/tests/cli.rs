//! Integration tests running the CLI binary against data files in a
//! temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn catalog_index(lat: usize, lon: usize) -> usize {
    4 * ((89 - lat) * 360 + lon)
}

/// A land triangle in cell (10, 10) at resolution 3, with empty
/// neighbours to the east and south.
fn write_fixture(dir: &Path) {
    let mut catalog = vec![0u8; catalog_index(9, 11) + 4];
    for (lat, lon) in [(10, 11), (9, 10), (9, 11)] {
        let index = catalog_index(lat, lon);
        catalog[index..index + 4].copy_from_slice(&1u32.to_le_bytes());
    }
    let index = catalog_index(10, 10);
    catalog[index..index + 4].copy_from_slice(&2u32.to_le_bytes());

    // Offset 0: a cell without polygons. Offset 1: the triangle.
    let mut polygons = vec![0u8, 1u8];
    polygons.extend_from_slice(&5u32.to_le_bytes());
    polygons.push(0x13);
    for (x, y) in [(10_200_000u32, 9_200_000u32), (10_800_000, 9_200_000), (10_500_000, 9_800_000)] {
        polygons.extend_from_slice(&x.to_le_bytes());
        polygons.extend_from_slice(&y.to_le_bytes());
    }
    polygons.extend_from_slice(&[0, 0]);

    fs::write(dir.join("rangs(3).cat"), catalog).unwrap();
    fs::write(dir.join("rangs(3).cel"), polygons).unwrap();
    fs::write(dir.join("gshhs(3).rim"), b"").unwrap();
}

/// Config pointing data and logs into `temp`.
fn write_config(temp: &Path, data_dir: &Path) -> PathBuf {
    let path = temp.join("config.ini");
    fs::write(
        &path,
        format!(
            "[data]\ndirectory = {}\nresolution = 3\n\n[logging]\ndirectory = {}\n",
            data_dir.display(),
            temp.join("logs").display()
        ),
    )
    .unwrap();
    path
}

fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rangs-cli"))
        .args(args)
        .env("HOME", home)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute CLI command")
}

fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_config_init_and_show() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf").join("config.ini");
    let config_arg = config.to_str().unwrap();

    let output = run_cli(temp.path(), &["config", "init", "--config", config_arg]);
    assert_success(&output, "config init");
    assert!(config.exists());

    let output = run_cli(temp.path(), &["config", "show", "--config", config_arg]);
    assert_success(&output, "config show");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[data]"));
    assert!(stdout.contains("resolution = 3"));
}

#[test]
fn test_config_path_defaults_to_home() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(temp.path(), &["config", "path"]);
    assert_success(&output, "config path");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with(".rangs/config.ini"));
}

#[test]
fn test_cell_lists_shapes() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    let config = write_config(temp.path(), temp.path());

    let output = run_cli(
        temp.path(),
        &["cell", "--lat", "10", "--lon", "10", "--config", config.to_str().unwrap()],
    );
    assert_success(&output, "cell");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ring"));
    assert!(stdout.contains("land"));
    assert!(stdout.contains("1 rings"));
}

#[test]
fn test_render_writes_svg() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    let config = write_config(temp.path(), temp.path());
    let svg = temp.path().join("map.svg");

    let output = run_cli(
        temp.path(),
        &[
            "render",
            "--north", "10",
            "--west", "10",
            "--south", "9.5",
            "--east", "10.5",
            "--width", "300",
            "--height", "200",
            "--output", svg.to_str().unwrap(),
            "--config", config.to_str().unwrap(),
        ],
    );
    assert_success(&output, "render");

    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.contains(r#"width="300" height="200""#));
    assert!(content.contains("<polygon"));
}

#[test]
fn test_missing_data_reports_expected_files() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let config = write_config(temp.path(), &empty);

    let output = run_cli(
        temp.path(),
        &["cell", "--lat", "10", "--lon", "10", "--config", config.to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected RANGS data files"));
}
