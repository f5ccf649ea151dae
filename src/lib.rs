//! # Rulescout: SwiftLint Rule Discovery
//!
//! Rulescout finds the SwiftLint rules a project has left disabled without
//! explicitly opting out, so you can decide whether to turn them on. It runs
//! `swiftlint rules`, parses the bordered table it prints, reads the
//! project's `.swiftlint.yml`, and reports the difference:
//!
//! - **Disabled rules**: everything the listing marks as not enabled
//! - **Explicit exclusions**: identifiers under `disabled_rules` in the
//!   project configuration
//! - **New rules**: disabled minus explicitly excluded, partitioned into
//!   opt-in and analyzer sections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! use rulescout::core::config::ConfigReader;
//! use rulescout::core::table::parse_disabled_rules;
//! use rulescout::io::reports::{ReportMode, RuleReport};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let listing = std::fs::read_to_string("rules.txt")?;
//!     let disabled = parse_disabled_rules(&listing)?;
//!     let excluded = ConfigReader::new().explicitly_disabled_rules(Path::new("."))?;
//!
//!     let new_rules: HashSet<_> = disabled.difference(&excluded).cloned().collect();
//!     let report = RuleReport::from_rules(new_rules);
//!     report.write(&mut std::io::stdout(), ReportMode::Full)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core domain modules
pub mod core {
    //! Rule records, table parsing, and configuration loading.

    pub mod config;
    pub mod errors;
    pub mod rules;
    pub mod table;
}

// Reporting
pub mod io {
    //! Report construction and rendering.

    pub mod reports;
}

// Re-export the main API surface
pub use crate::core::config::ConfigReader;
pub use crate::core::errors::{Result, RulescoutError};
pub use crate::core::rules::Rule;
pub use crate::core::table::parse_disabled_rules;
pub use crate::io::reports::{ReportMode, RuleReport};

/// Version of the rulescout crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
