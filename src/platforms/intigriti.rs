// src/platforms/intigriti.rs
//! Intigriti feed extraction
//!
//! Bounty bounds appear either as bare numbers or as objects carrying a
//! `value`; both shapes gate on a positive amount.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{first_non_empty, looks_like_repo, PlatformFeed, Program, TargetList};
use crate::normalize::normalize_repo_url;

/// Intigriti feed extractor
pub struct Intigriti;

#[derive(Debug, Deserialize)]
struct IntigritiProgram {
    name: Option<String>,
    url: Option<String>,
    min_bounty: Option<BountyAmount>,
    max_bounty: Option<BountyAmount>,
    targets: Option<TargetList<IntigritiTarget>>,
}

#[derive(Debug, Deserialize)]
struct IntigritiTarget {
    endpoint: Option<String>,
    target: Option<String>,
}

/// Bounty bound that is either a bare number or an object with a `value`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BountyAmount {
    Flat(f64),
    Tiered { value: Option<f64> },
}

impl BountyAmount {
    fn amount(&self) -> f64 {
        match self {
            BountyAmount::Flat(value) => *value,
            BountyAmount::Tiered { value } => value.unwrap_or(0.0),
        }
    }
}

impl PlatformFeed for Intigriti {
    fn name(&self) -> &'static str {
        "Intigriti"
    }

    fn feed_file(&self) -> &'static str {
        "intigriti_data.json"
    }

    fn extract(&self, data: &str) -> Result<Vec<Program>> {
        let records: Vec<IntigritiProgram> =
            serde_json::from_str(data).context("Failed to parse Intigriti feed")?;

        let mut programs = Vec::new();
        for record in records {
            let min = record.min_bounty.map(|b| b.amount()).unwrap_or(0.0);
            let max = record.max_bounty.map(|b| b.amount()).unwrap_or(0.0);
            if min <= 0.0 && max <= 0.0 {
                continue;
            }

            let mut repos = BTreeSet::new();
            for target in record.targets.and_then(|t| t.in_scope).unwrap_or_default() {
                let candidate =
                    first_non_empty(&[target.endpoint.as_deref(), target.target.as_deref()]);
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

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "Tiered Rewards",
            "url": "https://app.intigriti.com/programs/tiered",
            "min_bounty": {"value": 100, "currency": "EUR"},
            "max_bounty": {"value": 10000, "currency": "EUR"},
            "targets": {
                "in_scope": [
                    {"endpoint": "https://github.com/tiered/api", "type": "url"}
                ]
            }
        },
        {
            "name": "Flat Rewards",
            "url": "https://app.intigriti.com/programs/flat",
            "min_bounty": 0,
            "max_bounty": 2500,
            "targets": {
                "in_scope": [
                    {"endpoint": "https://gitlab.com/flat/core"}
                ]
            }
        },
        {
            "name": "Responsible Disclosure",
            "url": "https://app.intigriti.com/programs/rd",
            "min_bounty": {"value": 0},
            "max_bounty": {"value": 0},
            "targets": {
                "in_scope": [
                    {"endpoint": "https://github.com/rd/app"}
                ]
            }
        }
    ]"#;

    #[test]
    fn test_both_bounty_shapes_accepted() {
        let programs = Intigriti.extract(SAMPLE).unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].name, "Tiered Rewards");
        assert_eq!(programs[1].name, "Flat Rewards");
    }

    #[test]
    fn test_zero_value_bounds_excluded() {
        let programs = Intigriti.extract(SAMPLE).unwrap();
        assert!(programs.iter().all(|p| p.name != "Responsible Disclosure"));
    }

    #[test]
    fn test_missing_and_null_bounds_treated_as_zero() {
        let data = r#"[
            {"name": "No Bounds",
             "targets": {"in_scope": [{"endpoint": "github.com/x/y"}]}},
            {"name": "Null Value", "min_bounty": {"value": null}, "max_bounty": {},
             "targets": {"in_scope": [{"endpoint": "github.com/x/y"}]}}
        ]"#;
        assert!(Intigriti.extract(data).unwrap().is_empty());
    }

    #[test]
    fn test_target_fallback_when_endpoint_missing() {
        let data = r#"[{
            "name": "Legacy Fields",
            "max_bounty": 500,
            "targets": {"in_scope": [
                {"target": "https://github.com/legacy/app"}
            ]}
        }]"#;
        let programs = Intigriti.extract(data).unwrap();
        assert!(programs[0].repos.contains("https://github.com/legacy/app"));
    }

    #[test]
    fn test_malformed_bounty_shape_is_an_error() {
        let data = r#"[{"name": "Bad", "max_bounty": "lots",
                        "targets": {"in_scope": []}}]"#;
        assert!(Intigriti.extract(data).is_err());
    }
}
