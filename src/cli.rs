// src/cli.rs
use clap::Parser;

/// Bounty-Scout: open-source repository extraction from bug bounty feeds
///
/// Reads downloaded platform data files, keeps programs that pay bounties
/// and declare GitHub/GitLab repositories in scope, and writes a detailed
/// report plus a deduplicated repository list.
#[derive(Parser, Debug, Clone)]
#[command(name = "bounty-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Input =====
    /// Directory containing the downloaded platform feed files
    #[arg(short = 'd', long = "data-dir", default_value = "data")]
    pub data_dir: String,

    /// File with manually curated repositories to merge (one per line)
    #[arg(short = 'm', long = "manual-additions", default_value = "manual_additions.txt")]
    pub manual_additions: String,

    // ===== Output =====
    /// Path for the detailed per-program report
    #[arg(long = "report", default_value = "oss_bounty_targets.txt")]
    pub report_file: String,

    /// Path for the deduplicated repository list
    #[arg(long = "repos", default_value = "oss_repos_only.txt")]
    pub repos_file: String,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        // Verbose and quiet are mutually exclusive
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    /// Determine log level based on verbose/quiet flags
    pub fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
