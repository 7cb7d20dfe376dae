// src/report.rs
//! Report rendering for extraction results
//!
//! Two text outputs: a detailed per-program report with comment headers, and
//! a flat deduplicated repository list.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::platforms::Program;

/// Write the detailed per-program report
///
/// Each program becomes a block introduced by a blank line:
///
/// ```text
///
/// # === HackerOne - Acme ===
/// # Program URL: https://hackerone.com/acme
/// https://github.com/acme/core
/// ```
///
/// Repository URLs within a block are sorted ascending.
pub fn write_report<W: Write>(writer: &mut W, programs: &[Program]) -> Result<()> {
    for program in programs {
        writeln!(writer)?;
        writeln!(writer, "# === {} - {} ===", program.platform, program.name)?;
        writeln!(writer, "# Program URL: {}", program.url)?;
        for repo in &program.repos {
            writeln!(writer, "{}", repo)?;
        }
    }
    Ok(())
}

/// Write the flat repository list, one URL per line, sorted ascending
pub fn write_repo_list<W: Write>(writer: &mut W, repos: &BTreeSet<String>) -> Result<()> {
    for repo in repos {
        writeln!(writer, "{}", repo)?;
    }
    Ok(())
}

/// Write the detailed report to a file
pub fn write_report_file(path: &Path, programs: &[Program]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, programs)?;
    writer.flush()?;
    Ok(())
}

/// Write the repository list to a file
pub fn write_repo_list_file(path: &Path, repos: &BTreeSet<String>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create repository list {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_repo_list(&mut writer, repos)?;
    writer.flush()?;
    Ok(())
}
