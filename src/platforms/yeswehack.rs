// src/platforms/yeswehack.rs
//! YesWeHack feed extraction
//!
//! The feed carries flat `min_bounty`/`max_bounty` numbers and no public
//! program URL, so one is synthesized from the program id.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{looks_like_repo, PlatformFeed, Program, TargetList};
use crate::normalize::normalize_repo_url;

/// YesWeHack feed extractor
pub struct YesWeHack;

#[derive(Debug, Deserialize)]
struct YesWeHackProgram {
    id: Option<String>,
    name: Option<String>,
    min_bounty: Option<f64>,
    max_bounty: Option<f64>,
    targets: Option<TargetList<YesWeHackTarget>>,
}

#[derive(Debug, Deserialize)]
struct YesWeHackTarget {
    target: Option<String>,
}

impl PlatformFeed for YesWeHack {
    fn name(&self) -> &'static str {
        "YesWeHack"
    }

    fn feed_file(&self) -> &'static str {
        "yeswehack_data.json"
    }

    fn extract(&self, data: &str) -> Result<Vec<Program>> {
        let records: Vec<YesWeHackProgram> =
            serde_json::from_str(data).context("Failed to parse YesWeHack feed")?;

        let mut programs = Vec::new();
        for record in records {
            if record.min_bounty.unwrap_or(0.0) <= 0.0
                && record.max_bounty.unwrap_or(0.0) <= 0.0
            {
                continue;
            }

            let url = match record.id.as_deref() {
                Some(id) if !id.is_empty() => {
                    format!("https://yeswehack.com/programs/{}", id)
                }
                _ => String::new(),
            };

            let mut repos = BTreeSet::new();
            for target in record.targets.and_then(|t| t.in_scope).unwrap_or_default() {
                let candidate = target.target.as_deref().unwrap_or("");
                if looks_like_repo(candidate) {
                    repos.extend(normalize_repo_url(candidate));
                }
            }

            if repos.is_empty() {
                continue;
            }

            programs.push(Program {
                platform: self.name().to_string(),
                name: record.name.unwrap_or_else(|| "Unknown".to_string()),
                url,
                repos,
            });
        }

        Ok(programs)
    }
}
