// src/pipeline.rs
//! End-to-end extraction run
//!
//! Walks the platform feeds in order, aggregates bounty programs with
//! repository scope, and writes both output files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::manual::load_manual_additions;
use crate::platforms::all_platforms;
use crate::report;

/// Counters from a completed extraction run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub platforms_processed: usize,
    pub platforms_skipped: usize,
    pub programs: usize,
    pub unique_repos: usize,
    pub manual_additions: usize,
}

/// Run the full extraction pipeline
///
/// Feeds missing from `data_dir` are skipped with a warning; a feed that is
/// present but unparseable aborts the run. Both output files are written
/// even when nothing was extracted.
pub fn run(
    data_dir: &Path,
    report_path: &Path,
    repos_path: &Path,
    manual_path: &Path,
) -> Result<RunSummary> {
    let mut all_programs = Vec::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for platform in all_platforms() {
        let feed_path = data_dir.join(platform.feed_file());
        if !feed_path.exists() {
            warn!("Skipping {}: {} not found", platform.name(), feed_path.display());
            skipped += 1;
            continue;
        }

        info!("Processing {}...", platform.name());
        let data = fs::read_to_string(&feed_path)
            .with_context(|| format!("Failed to read feed {}", feed_path.display()))?;

        let programs = platform
            .extract(&data)
            .with_context(|| format!("Failed to extract programs from {}", feed_path.display()))?;

        info!(
            "{}: {} bounty programs with repository scope",
            platform.name(),
            programs.len()
        );
        processed += 1;
        all_programs.extend(programs);
    }

    info!("Found {} programs across all platforms", all_programs.len());

    report::write_report_file(report_path, &all_programs)?;
    info!("Detailed report written to {}", report_path.display());

    let mut all_repos: BTreeSet<String> = all_programs
        .iter()
        .flat_map(|p| p.repos.iter().cloned())
        .collect();

    let manual = load_manual_additions(manual_path)?;
    let manual_count = manual.len();
    if manual_count > 0 {
        info!("Merging {} manual additions", manual_count);
    }
    all_repos.extend(manual);

    report::write_repo_list_file(repos_path, &all_repos)?;
    info!(
        "{} unique repository URLs written to {}",
        all_repos.len(),
        repos_path.display()
    );

    Ok(RunSummary {
        platforms_processed: processed,
        platforms_skipped: skipped,
        programs: all_programs.len(),
        unique_repos: all_repos.len(),
        manual_additions: manual_count,
    })
}
