// src/platforms/federacy.rs
//! Federacy feed extraction; `offers_bounty` marks paying programs.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{first_non_empty, looks_like_repo, PlatformFeed, Program, TargetList};
use crate::normalize::normalize_repo_url;

/// Federacy feed extractor
pub struct Federacy;

#[derive(Debug, Deserialize)]
struct FederacyProgram {
    name: Option<String>,
    url: Option<String>,
    offers_bounty: Option<bool>,
    targets: Option<TargetList<FederacyTarget>>,
}

#[derive(Debug, Deserialize)]
struct FederacyTarget {
    target: Option<String>,
    identifier: Option<String>,
}

impl PlatformFeed for Federacy {
    fn name(&self) -> &'static str {
        "Federacy"
    }

    fn feed_file(&self) -> &'static str {
        "federacy_data.json"
    }

    fn extract(&self, data: &str) -> Result<Vec<Program>> {
        let records: Vec<FederacyProgram> =
            serde_json::from_str(data).context("Failed to parse Federacy feed")?;

        let mut programs = Vec::new();
        for record in records {
            if !record.offers_bounty.unwrap_or(false) {
                continue;
            }

            let mut repos = BTreeSet::new();
            for target in record.targets.and_then(|t| t.in_scope).unwrap_or_default() {
                let candidate =
                    first_non_empty(&[target.target.as_deref(), target.identifier.as_deref()]);
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
                url: record.url.unwrap_or_default(),
                repos,
            });
        }

        Ok(programs)
    }
}
