//! Custom cargo commands for the kata crate.
//!
//! Usage:
//!   cargo xtask verify    - Contract markers + tests + clippy
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["max_subarray", "two_sum", "rule_parsing", "palindrome"];

/// Public operations, each of which must call at least one contract check.
const CONTRACT_CALLERS: &[(&str, &str)] = &[
    ("src/fizzbuzz.rs", "check_labels_len"),
    ("src/strings.rs", "check_reversal"),
    ("src/fibonacci.rs", "check_fibonacci_prefix"),
    ("src/search/subarray.rs", "check_subarray_witness"),
    ("src/search/two_sum.rs", "check_two_sum_pair"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contract markers + tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for 30 seconds (requires cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("kata Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking contract calls...");
    check_contract_calls()?;
    println!("✓ Every operation checks its contract\n");

    println!("[2/3] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

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

/// Run each fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ All fuzz targets ran clean");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

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

fn check_contract_calls() -> Result<()> {
    let root = project_root()?;

    for (file, contract) in CONTRACT_CALLERS {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;

        // The import alone doesn't count; the check has to be called
        if !source.contains(&format!("{}(", contract)) {
            bail!(
                "{} no longer calls {}. Someone may have removed a contract check!",
                file,
                contract
            );
        }
    }

    Ok(())
}
