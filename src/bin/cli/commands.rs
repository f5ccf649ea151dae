//! Discovery Command Execution Logic
//!
//! Orchestration only: validate the target directory, run the external
//! rule listing, load the project configuration, compute the set
//! difference, and render the report. Any SwiftLint failure is fatal for
//! the run; a failing lint tool points at an environment problem this
//! tool cannot repair by retrying.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use rulescout::core::config::ConfigReader;
use rulescout::core::errors::{Result, RulescoutError};
use rulescout::core::rules::Rule;
use rulescout::core::table::parse_disabled_rules;
use rulescout::io::reports::{ReportMode, RuleReport};

use crate::cli::args::Cli;

/// Main discovery command implementation
pub async fn discover_command(args: &Cli) -> Result<()> {
    let project_dir = resolve_project_dir(&args.dir)?;
    debug!("discovering rules for {}", project_dir.display());

    let listing = run_rules_listing(&project_dir).await?;
    let disabled = parse_disabled_rules(&listing)?;
    let excluded = ConfigReader::new().explicitly_disabled_rules(&project_dir)?;
    info!(
        disabled = disabled.len(),
        excluded = excluded.len(),
        "rule sets collected"
    );

    let new_rules: HashSet<Rule> = disabled.difference(&excluded).cloned().collect();
    let report = RuleReport::from_rules(new_rules);

    let mode = if args.quiet {
        ReportMode::Quiet
    } else {
        ReportMode::Full
    };
    report.write(&mut std::io::stdout().lock(), mode)
}

/// Validate and canonicalize the target project directory.
fn resolve_project_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(RulescoutError::invalid_directory(dir));
    }

    dir.canonicalize().map_err(|err| {
        RulescoutError::io(
            format!("Failed to resolve project directory {}", dir.display()),
            err,
        )
    })
}

/// Run `swiftlint rules` scoped to the project directory and buffer its
/// stdout to completion.
async fn run_rules_listing(project_dir: &Path) -> Result<String> {
    let output = Command::new("swiftlint")
        .arg("rules")
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|err| RulescoutError::io("Failed to run `swiftlint rules`", err))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut message = format!("`swiftlint rules` exited with {}", output.status);
        if !stderr.trim().is_empty() {
            message.push_str(": ");
            message.push_str(stderr.trim());
        }
        return Err(RulescoutError::command(message, output.status.code()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
