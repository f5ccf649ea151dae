//! Project configuration loading for rulescout.
//!
//! SwiftLint projects track deliberate exclusions under the
//! `disabled_rules` key of `.swiftlint.yml`. An absent file or absent key
//! is a normal state, not an error: the project simply has no explicit
//! exclusions, and discovery still works.
//!
//! The YAML parsing step is an injected capability rather than a direct
//! call, so tests can exercise the degraded mode where no YAML support is
//! available and the reader falls back to an empty exclusion set.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::errors::{Result, RulescoutError};
use crate::core::rules::Rule;

/// File name SwiftLint reads its project configuration from.
pub const CONFIG_FILE_NAME: &str = ".swiftlint.yml";

/// The subset of the SwiftLint configuration document rulescout reads.
///
/// Unknown keys are ignored; a document without `disabled_rules`
/// deserializes to an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwiftlintConfig {
    /// Rule identifiers the project deliberately keeps disabled.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

/// Parses YAML text into a configuration document.
///
/// `None` means the document was empty (an empty or comments-only
/// `.swiftlint.yml` parses as YAML null).
pub type YamlParser =
    fn(&str) -> std::result::Result<Option<SwiftlintConfig>, serde_yaml::Error>;

/// Reads the project's explicit rule exclusions.
pub struct ConfigReader {
    parser: Option<YamlParser>,
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader {
    /// Create a reader with full YAML support.
    pub fn new() -> Self {
        Self {
            parser: Some(parse_document),
        }
    }

    /// Create a reader without YAML support.
    ///
    /// Such a reader warns once and reports no explicit exclusions, so
    /// discovery keeps working for the rest of the run.
    pub fn without_yaml_support() -> Self {
        Self { parser: None }
    }

    /// Load the configuration document from `project_dir`, if any.
    pub fn load(&self, project_dir: &Path) -> Result<Option<SwiftlintConfig>> {
        let Some(parser) = self.parser else {
            warn!(
                "YAML support unavailable; not checking disabled rules in \
                 your SwiftLint configuration file"
            );
            return Ok(None);
        };

        let path = project_dir.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no {CONFIG_FILE_NAME} in {}", project_dir.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(RulescoutError::io(
                    format!("Failed to read config file: {}", path.display()),
                    err,
                ))
            }
        };

        parser(&content).map_err(|err| {
            RulescoutError::config_field(
                format!("Failed to parse {}: {err}", path.display()),
                CONFIG_FILE_NAME,
            )
        })
    }

    /// The set of rules the project explicitly keeps disabled.
    ///
    /// Identifiers are wrapped as minimal [`Rule`] records so they take
    /// part in set arithmetic against parser-derived records.
    pub fn explicitly_disabled_rules(&self, project_dir: &Path) -> Result<HashSet<Rule>> {
        let Some(config) = self.load(project_dir)? else {
            return Ok(HashSet::new());
        };

        Ok(config.disabled_rules.into_iter().map(Rule::named).collect())
    }
}

fn parse_document(
    content: &str,
) -> std::result::Result<Option<SwiftlintConfig>, serde_yaml::Error> {
    serde_yaml::from_str(content)
}
