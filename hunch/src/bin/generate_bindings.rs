//! Generate UniFFI Python bindings for the hunch engine
//!
//! Run: cargo run --bin generate-bindings
//!
//! Inputs:
//!   target/release/libhunch.{so,dylib}   built library for bindgen
//!
//! Outputs (paths match the host app's loader in bindings/python/__init__.py):
//!   bindings/python/hunch.py             generated Python module
//!   bindings/python/libhunch.{so,dylib}  dynamic library the module loads

use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(target_os = "macos")]
const DYLIB_NAME: &str = "libhunch.dylib";
#[cfg(all(unix, not(target_os = "macos")))]
const DYLIB_NAME: &str = "libhunch.so";
#[cfg(windows)]
const DYLIB_NAME: &str = "hunch.dll";

fn main() -> Result<()> {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let project_root = crate_dir.parent().context("No parent directory")?;

    println!("Building Rust library...");
    run_cmd("cargo", &["build", "--release"], &crate_dir)?;

    let library = format!("target/release/{DYLIB_NAME}");

    println!("Generating Python bindings...");
    run_cmd(
        "cargo",
        &[
            "run",
            "--bin",
            "uniffi-bindgen",
            "generate",
            "--library",
            &library,
            "--language",
            "python",
            "--out-dir",
            "generated",
        ],
        &crate_dir,
    )?;

    let dest = project_root.join("bindings/python");
    fs::create_dir_all(&dest)
        .with_context(|| format!("Creating bindings directory {}", dest.display()))?;

    println!("Copying generated Python module...");
    fs::copy(crate_dir.join("generated/hunch.py"), dest.join("hunch.py"))
        .context("Copying hunch.py")?;
    fs::copy(crate_dir.join(&library), dest.join(DYLIB_NAME))
        .with_context(|| format!("Copying {DYLIB_NAME}"))?;

    println!("Done! Bindings regenerated successfully.");
    println!("Generated files:");
    println!("  - {}/hunch.py (UniFFI generated)", dest.display());
    println!("  - {}/{}", dest.display(), DYLIB_NAME);
    Ok(())
}

fn run_cmd(program: &str, args: &[&str], dir: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {program}"))?;

    ensure!(status.success(), "{program} failed with status: {status}");
    Ok(())
}
