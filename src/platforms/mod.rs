// src/platforms/mod.rs
//! Bug bounty platform feed extraction
//!
//! Each submodule maps one platform's feed format onto the shared `Program`
//! shape: a bounty-eligibility rule, the in-scope target fields to probe,
//! and the repository screen.

use std::collections::BTreeSet;

use anyhow::Result;
use serde::Deserialize;

pub mod bugcrowd;
pub mod federacy;
pub mod hackerone;
pub mod intigriti;
pub mod yeswehack;

pub use bugcrowd::Bugcrowd;
pub use federacy::Federacy;
pub use hackerone::HackerOne;
pub use intigriti::Intigriti;
pub use yeswehack::YesWeHack;

/// A bounty-paying program with at least one repository in scope
#[derive(Debug, Clone)]
pub struct Program {
    /// Platform display name (e.g., "HackerOne")
    pub platform: String,

    /// Display name of the program ("Unknown" when the feed omits it)
    pub name: String,

    /// Public program URL (empty when the feed has none)
    pub url: String,

    /// Deduplicated canonical repository URLs extracted from the scope
    pub repos: BTreeSet<String>,
}

/// Platform feed extractor
pub trait PlatformFeed {
    /// Platform display name (e.g., "HackerOne", "Intigriti")
    fn name(&self) -> &'static str;

    /// Feed file name expected under the data directory
    fn feed_file(&self) -> &'static str;

    /// Extract bounty-paying programs with repository scope from feed JSON
    fn extract(&self, data: &str) -> Result<Vec<Program>>;
}

/// All supported platforms, in processing order
pub fn all_platforms() -> Vec<Box<dyn PlatformFeed>> {
    vec![
        Box::new(HackerOne),
        Box::new(Bugcrowd),
        Box::new(YesWeHack),
        Box::new(Intigriti),
        Box::new(Federacy),
    ]
}

/// Scope container shared by every feed format
#[derive(Debug, Deserialize)]
pub struct TargetList<T> {
    pub in_scope: Option<Vec<T>>,
}

/// Check whether a scope string plausibly points at a repository
///
/// Substring screen only; `normalize_repo_url` decides what actually becomes
/// a URL. Bitbucket is deliberately absent: its URLs only survive through
/// asset types that bypass the screen.
pub fn looks_like_repo(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    lower.contains("github") || lower.contains("gitlab")
}

/// First present, non-empty candidate from a priority-ordered field list
pub fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> &'a str {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
        .unwrap_or("")
}
