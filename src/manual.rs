// src/manual.rs
//! Manually curated repository additions
//!
//! Line-oriented supplement file merged into the unique repository list.
//! Entries may be full URLs, `org/repo` shorthand, or anything else worth
//! keeping verbatim.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::normalize::normalize_repo_url;

/// Load manual additions from a file, one entry per line
///
/// A missing file is not an error; it yields an empty set. Blank lines and
/// `#` comments are skipped. Lines the normalizer understands are replaced
/// by their canonical URLs, everything else passes through untouched.
pub fn load_manual_additions(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Ok(BTreeSet::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manual additions from {}", path.display()))?;

    let mut repos = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let normalized = normalize_repo_url(line);
        if normalized.is_empty() {
            repos.insert(line.to_string());
        } else {
            repos.extend(normalized);
        }
    }

    Ok(repos)
}
