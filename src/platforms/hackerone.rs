// src/platforms/hackerone.rs
//! HackerOne feed extraction
//!
//! HackerOne marks paying programs with `offers_bounties` and carries a
//! per-target `eligible_for_bounty` flag plus an asset type tag.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{looks_like_repo, PlatformFeed, Program, TargetList};
use crate::normalize::normalize_repo_url;

/// HackerOne feed extractor
pub struct HackerOne;

#[derive(Debug, Deserialize)]
struct HackerOneProgram {
    offers_bounties: Option<bool>,
    name: Option<String>,
    url: Option<String>,
    targets: Option<TargetList<HackerOneTarget>>,
}

#[derive(Debug, Deserialize)]
struct HackerOneTarget {
    asset_identifier: Option<String>,
    asset_type: Option<String>,
    eligible_for_bounty: Option<bool>,
}

impl PlatformFeed for HackerOne {
    fn name(&self) -> &'static str {
        "HackerOne"
    }

    fn feed_file(&self) -> &'static str {
        "hackerone_data.json"
    }

    fn extract(&self, data: &str) -> Result<Vec<Program>> {
        let records: Vec<HackerOneProgram> =
            serde_json::from_str(data).context("Failed to parse HackerOne feed")?;

        let mut programs = Vec::new();
        for record in records {
            if !record.offers_bounties.unwrap_or(false) {
                continue;
            }

            let mut repos = BTreeSet::new();
            for target in record.targets.and_then(|t| t.in_scope).unwrap_or_default() {
                if !target.eligible_for_bounty.unwrap_or(false) {
                    continue;
                }

                let asset_id = target.asset_identifier.as_deref().unwrap_or("");
                let asset_type = target.asset_type.as_deref().unwrap_or("");

                // SOURCE_CODE assets qualify even without a recognizable host
                if asset_type == "SOURCE_CODE" || looks_like_repo(asset_id) {
                    repos.extend(normalize_repo_url(asset_id));
                }
            }

            if repos.is_empty() {
                continue;
            }

            programs.push(Program {
                platform: self.name().to_string(),
                name: record.name.unwrap_or_else(|| "Unknown".to_string()),
                url: record.url.unwrap_or_default(),
                repos,
            });
        }

        Ok(programs)
    }
}
