//! Rulescout CLI - SwiftLint Rule Discovery
//!
//! Runs `swiftlint rules` against a project, compares the disabled rules
//! with the project's explicit exclusions, and reports what could still
//! be enabled.

use clap::Parser;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; logs go to stderr so quiet-mode stdout
    // stays script-consumable
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::discover_command(&cli).await?;

    Ok(())
}
