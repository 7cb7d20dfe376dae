// src/main.rs
use bounty_scout::cli::Cli;
use bounty_scout::pipeline;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    tracing::info!("Starting bounty-scout...");

    let summary = pipeline::run(
        Path::new(&cli.data_dir),
        Path::new(&cli.report_file),
        Path::new(&cli.repos_file),
        Path::new(&cli.manual_additions),
    )?;

    println!("\n📊 Extraction Summary:");
    println!(
        "  Platforms processed: {} ({} skipped)",
        summary.platforms_processed, summary.platforms_skipped
    );
    println!("  Bounty programs with repositories: {}", summary.programs);
    println!("  Unique repository URLs: {}", summary.unique_repos);
    if summary.manual_additions > 0 {
        println!("  Manual additions merged: {}", summary.manual_additions);
    }
    println!();
    println!("{} Detailed report: {}", "[+]".green().bold(), cli.report_file.cyan());
    println!("{} Repository list: {}", "[+]".green().bold(), cli.repos_file.cyan());

    Ok(())
}
