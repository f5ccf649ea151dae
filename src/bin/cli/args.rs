//! CLI Argument Structures
//!
//! This module contains the argument definitions for the rulescout binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SwiftLint Rule Discovery
#[derive(Parser)]
#[command(name = "rulescout")]
#[command(version = VERSION)]
#[command(about = "Discover disabled SwiftLint rules your project could still enable")]
#[command(long_about = "
Rulescout runs `swiftlint rules` against a project, subtracts the rules the
project explicitly lists under `disabled_rules` in .swiftlint.yml, and
reports the opt-in and analyzer rules that remain disabled without anyone
having decided so.

Common Usage:

  # Discover rules for the project in the current directory
  rulescout

  # Discover rules for a specific project
  rulescout ~/src/MyApp

  # Script-friendly output: opt-in identifiers only, one per line
  rulescout --quiet ~/src/MyApp
")]
pub struct Cli {
    /// Path to the project directory containing the .swiftlint.yml
    /// configuration file. Defaults to the current working directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print only opt-in rule identifiers, one per line, without section
    /// headers, documentation links, or analyzer rules
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
