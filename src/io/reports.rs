//! Report construction and rendering.
//!
//! The new-rules set is partitioned into the two sections worth surfacing:
//! opt-in rules (cheap to enable) and analyzer rules (require the separate
//! analysis pass). A disabled rule that is neither opt-in nor analyzer is
//! dropped from the report: it is disabled by project choice rather than by
//! default, and toggling it is not the discovery question this tool
//! answers.

use std::io::Write;

use console::style;

use crate::core::errors::{Result, RulescoutError};
use crate::core::rules::Rule;

/// How much of the report to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Section headers, identifiers, and documentation links
    Full,
    /// Opt-in identifiers only, one per line, script-friendly
    Quiet,
}

/// The partitioned, sorted report over a new-rules set.
#[derive(Debug, Default)]
pub struct RuleReport {
    opt_in: Vec<Rule>,
    analyzer: Vec<Rule>,
}

impl RuleReport {
    /// Partition a new-rules set into report sections.
    ///
    /// Analyzer rules win over the opt-in section so the two lists stay
    /// disjoint; enabled rules are skipped outright. Each section is
    /// sorted by identifier, ascending.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut opt_in = Vec::new();
        let mut analyzer = Vec::new();

        for rule in rules {
            if rule.enabled {
                continue;
            }
            if rule.analyzer {
                analyzer.push(rule);
            } else if rule.opt_in {
                opt_in.push(rule);
            }
        }

        opt_in.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        analyzer.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        Self { opt_in, analyzer }
    }

    /// Opt-in rules the project could enable.
    pub fn opt_in(&self) -> &[Rule] {
        &self.opt_in
    }

    /// Analyzer rules the project could enable.
    pub fn analyzer(&self) -> &[Rule] {
        &self.analyzer
    }

    /// True when both sections are empty.
    pub fn is_empty(&self) -> bool {
        self.opt_in.is_empty() && self.analyzer.is_empty()
    }

    /// Render the report.
    pub fn write(&self, out: &mut impl Write, mode: ReportMode) -> Result<()> {
        match mode {
            ReportMode::Full => self.write_full(out),
            ReportMode::Quiet => self.write_quiet(out),
        }
    }

    fn write_full(&self, out: &mut impl Write) -> Result<()> {
        if self.is_empty() {
            writeln!(out, "No new rules to enable!").map_err(write_error)?;
            return Ok(());
        }

        write_section(out, "Opt-in", &self.opt_in)?;
        write_section(out, "Analyzer", &self.analyzer)?;
        Ok(())
    }

    fn write_quiet(&self, out: &mut impl Write) -> Result<()> {
        for rule in &self.opt_in {
            writeln!(out, "{}", rule.identifier).map_err(write_error)?;
        }
        Ok(())
    }
}

fn write_section(out: &mut impl Write, section: &str, rules: &[Rule]) -> Result<()> {
    if rules.is_empty() {
        return Ok(());
    }

    writeln!(out).map_err(write_error)?;
    writeln!(
        out,
        "{}",
        style(format!("{section} rules you could enable:")).bold()
    )
    .map_err(write_error)?;

    for rule in rules {
        writeln!(out, "  - {}", rule.identifier).map_err(write_error)?;
        writeln!(out, "    {}", rule.docs_url()).map_err(write_error)?;
        writeln!(out).map_err(write_error)?;
    }

    Ok(())
}

fn write_error(err: std::io::Error) -> RulescoutError {
    RulescoutError::io("Failed to write report", err)
}
