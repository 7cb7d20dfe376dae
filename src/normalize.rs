// src/normalize.rs
//! Repository URL normalization
//!
//! Turns free-text scope entries ("Source code: https://GitHub.com/acme/core,")
//! into canonical repository URLs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches repository URLs on the known hosts, with or without scheme/www
    static ref REPO_PATTERN: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?(github\.com|gitlab\.com|bitbucket\.org)/([^\s,;#)]+)"
    ).expect("repo pattern must compile");

    /// Matches bare "org/repo" shorthand (GitHub is the assumed host)
    static ref ORG_REPO_PATTERN: Regex = Regex::new(
        r"^([A-Za-z0-9_-]+)/([A-Za-z0-9_.*-]+)$"
    ).expect("org/repo pattern must compile");
}

/// Normalize a raw scope string into canonical repository URLs
///
/// Examples:
/// - "https://GitHub.com/Acme/core" -> ["https://github.com/Acme/core"]
/// - "see github.com/acme/a and gitlab.com/acme/b" -> both URLs
/// - "acme/server" -> ["https://github.com/acme/server"]
/// - "https://acme.com" -> []
///
/// Every match in the input is emitted, so one string can yield several URLs
/// (and can repeat a URL); callers own deduplication. Host casing is folded,
/// path casing is preserved.
pub fn normalize_repo_url(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let mut results = Vec::new();

    for caps in REPO_PATTERN.captures_iter(raw) {
        let host = caps[1].to_ascii_lowercase();
        // Strip list-likely trailing punctuation, then any slash it exposed
        let path = caps[2]
            .trim_end_matches('/')
            .trim_end_matches([',', ';', '#', ')', ']', '}'])
            .trim_end_matches('/');
        results.push(format!("https://{}/{}", host, path));
    }

    // Bare "org/repo" shorthand only counts when no host matched at all
    if results.is_empty() {
        if let Some(caps) = ORG_REPO_PATTERN.captures(raw) {
            results.push(format!("https://github.com/{}/{}", &caps[1], &caps[2]));
        }
    }

    results
}
