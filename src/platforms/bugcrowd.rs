// src/platforms/bugcrowd.rs
//! Bugcrowd feed extraction; a positive `max_payout` marks paying programs.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{first_non_empty, looks_like_repo, PlatformFeed, Program, TargetList};
use crate::normalize::normalize_repo_url;

/// Bugcrowd feed extractor
pub struct Bugcrowd;

#[derive(Debug, Deserialize)]
struct BugcrowdProgram {
    name: Option<String>,
    url: Option<String>,
    max_payout: Option<f64>,
    targets: Option<TargetList<BugcrowdTarget>>,
}

#[derive(Debug, Deserialize)]
struct BugcrowdTarget {
    target: Option<String>,
    uri: Option<String>,
}

impl PlatformFeed for Bugcrowd {
    fn name(&self) -> &'static str {
        "Bugcrowd"
    }

    fn feed_file(&self) -> &'static str {
        "bugcrowd_data.json"
    }

    fn extract(&self, data: &str) -> Result<Vec<Program>> {
        let records: Vec<BugcrowdProgram> =
            serde_json::from_str(data).context("Failed to parse Bugcrowd feed")?;

        let mut programs = Vec::new();
        for record in records {
            if record.max_payout.unwrap_or(0.0) <= 0.0 {
                continue;
            }

            let mut repos = BTreeSet::new();
            for target in record.targets.and_then(|t| t.in_scope).unwrap_or_default() {
                let candidate =
                    first_non_empty(&[target.target.as_deref(), target.uri.as_deref()]);
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
            "name": "Widget Co",
            "url": "https://bugcrowd.com/widgetco",
            "max_payout": 4500,
            "targets": {
                "in_scope": [
                    {"target": "https://github.com/widgetco/widgets"},
                    {"target": "api.widgetco.com"}
                ]
            }
        },
        {
            "name": "Points Only",
            "url": "https://bugcrowd.com/points",
            "max_payout": 0,
            "targets": {
                "in_scope": [
                    {"target": "https://github.com/points/app"}
                ]
            }
        },
        {
            "name": "Unrated",
            "url": "https://bugcrowd.com/unrated",
            "max_payout": null,
            "targets": {
                "in_scope": [
                    {"target": "https://gitlab.com/unrated/app"}
                ]
            }
        }
    ]"#;

    #[test]
    fn test_positive_payout_required() {
        let programs = Bugcrowd.extract(SAMPLE).unwrap();
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].name, "Widget Co");
        assert!(programs[0].repos.contains("https://github.com/widgetco/widgets"));
    }

    #[test]
    fn test_uri_fallback_when_target_missing_or_empty() {
        let data = r#"[{
            "name": "Fallback",
            "max_payout": 100.5,
            "targets": {"in_scope": [
                {"uri": "https://github.com/fallback/one"},
                {"target": "", "uri": "https://github.com/fallback/two"}
            ]}
        }]"#;
        let programs = Bugcrowd.extract(data).unwrap();
        assert_eq!(
            programs[0].repos.iter().collect::<Vec<_>>(),
            vec![
                "https://github.com/fallback/one",
                "https://github.com/fallback/two"
            ]
        );
    }

    #[test]
    fn test_repos_deduplicated_within_program() {
        let data = r#"[{
            "name": "Doubled",
            "max_payout": 200,
            "targets": {"in_scope": [
                {"target": "github.com/doubled/app"},
                {"uri": "https://github.com/doubled/app/"}
            ]}
        }]"#;
        let programs = Bugcrowd.extract(data).unwrap();
        assert_eq!(programs[0].repos.len(), 1);
    }

    #[test]
    fn test_feed_order_preserved() {
        let data = r#"[
            {"name": "B", "max_payout": 10,
             "targets": {"in_scope": [{"target": "github.com/b/b"}]}},
            {"name": "A", "max_payout": 10,
             "targets": {"in_scope": [{"target": "github.com/a/a"}]}}
        ]"#;
        let programs = Bugcrowd.extract(data).unwrap();
        assert_eq!(programs[0].name, "B");
        assert_eq!(programs[1].name, "A");
    }

    #[test]
    fn test_malformed_feed_is_an_error() {
        assert!(Bugcrowd.extract("not json at all").is_err());
    }
}
