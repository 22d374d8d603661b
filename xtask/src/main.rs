//! Custom cargo commands for edaoogle.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz T    - Fuzz target T for 60 seconds (needs nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LICENSE_HEADER: &str = "// Copyright 2025-present Harīṣh Tummalachērla\n\
                              // SPDX-License-Identifier: Apache-2.0\n";

const FUZZ_TARGETS: &[&str] = &[
    "markup_extraction",
    "corpus_parsing",
    "varint_codec",
    "search_queries",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (headers, fmt, tests, clippy, features)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz T    Run fuzz target T for 60 seconds

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("EDAoogle Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking license headers...");
    check_license_headers()?;
    println!("✓ License headers present\n");

    println!("[2/5] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[3/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Building without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target for a bounded time
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("Missing fuzz target (one of: {})", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!(
            "Unknown fuzz target {:?} (one of: {})",
            target,
            FUZZ_TARGETS.join(", ")
        );
    }

    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("Fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .context("Cannot determine project directory")?;

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_license_headers() -> Result<()> {
    let root = project_root()?;
    let mut missing = Vec::new();
    for dir in ["src", "fuzz/fuzz_targets"] {
        collect_missing_headers(&root.join(dir), &mut missing)?;
    }

    if !missing.is_empty() {
        for path in &missing {
            eprintln!("  missing header: {}", path.display());
        }
        bail!("{} source files lack the license header", missing.len());
    }
    Ok(())
}

fn collect_missing_headers(dir: &Path, missing: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_missing_headers(&path, missing)?;
        } else if path.extension().is_some_and(|e| e == "rs") {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !content.starts_with(LICENSE_HEADER) {
                missing.push(path);
            }
        }
    }
    Ok(())
}
