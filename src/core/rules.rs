//! Rule records and the textual boolean vocabulary.
//!
//! A [`Rule`] is one row of the `swiftlint rules` listing, or a bare
//! identifier taken from the project configuration. Identity is the
//! identifier alone: two records that disagree on every other attribute
//! are still the same set member. That policy is implemented as explicit
//! `PartialEq`/`Eq`/`Hash` impls rather than derived structural equality,
//! so the contract is visible here and not an accident of derivation.

use std::hash::{Hash, Hasher};

use crate::core::errors::{Result, RulescoutError};

/// Base URL for the SwiftLint rule documentation pages.
const DOCS_BASE_URL: &str = "https://realm.github.io/SwiftLint";

/// A single lint rule and its attributes as reported by SwiftLint.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique rule identifier, e.g. `explicit_init`
    pub identifier: String,
    /// Whether the rule is opt-in (disabled unless a project enables it)
    pub opt_in: bool,
    /// Whether `swiftlint --fix` can correct violations automatically
    pub correctable: bool,
    /// Whether the rule is enabled in the current configuration
    pub enabled: bool,
    /// Rule category, e.g. `style`, `lint`, `idiomatic`
    pub kind: String,
    /// Whether the rule requires the separate analyzer pass
    pub analyzer: bool,
    /// Whether the rule uses the external index store; only reported by
    /// tool versions that print the 8-column table
    pub uses_index: Option<bool>,
    /// Free-text configuration summary for the rule
    pub configuration: String,
}

impl Rule {
    /// Build a record from the positional cells of one table body row.
    ///
    /// Accepts the 7-column layout (identifier / opt-in / correctable /
    /// enabled / kind / analyzer / configuration) and the 8-column layout
    /// that inserts a uses-index attribute before the configuration.
    pub fn from_cells(cells: &[&str]) -> Result<Self> {
        let (identifier, opt_in, correctable, enabled, kind, analyzer, uses_index, configuration) =
            match cells {
                [id, opt, corr, en, kind, ana, conf] => (id, opt, corr, en, kind, ana, None, conf),
                [id, opt, corr, en, kind, ana, idx, conf] => {
                    (id, opt, corr, en, kind, ana, Some(parse_bool(idx)?), conf)
                }
                _ => {
                    return Err(RulescoutError::validation(format!(
                        "Expected 7 or 8 rule cells, found {}",
                        cells.len()
                    )))
                }
            };

        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(RulescoutError::validation(
                "Rule identifier must not be empty",
            ));
        }

        Ok(Self {
            identifier: identifier.to_string(),
            opt_in: parse_bool(opt_in)?,
            correctable: parse_bool(correctable)?,
            enabled: parse_bool(enabled)?,
            kind: kind.trim().to_string(),
            analyzer: parse_bool(analyzer)?,
            uses_index,
            configuration: configuration.trim().to_string(),
        })
    }

    /// Build a minimal record from a bare identifier, as needed for
    /// config-derived exclusions. Every other attribute defaults to
    /// disabled/false/empty.
    pub fn named(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into().trim().to_string(),
            opt_in: false,
            correctable: false,
            enabled: false,
            kind: String::new(),
            analyzer: false,
            uses_index: None,
            configuration: String::new(),
        }
    }

    /// Documentation page for this rule, derived from the identifier.
    pub fn docs_url(&self) -> String {
        format!("{DOCS_BASE_URL}/{}.html", self.identifier)
    }
}

// Identity is the identifier alone; see the module docs.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

/// Parse SwiftLint's two-valued boolean vocabulary.
///
/// Accepts exactly `yes` and `no`, case-insensitive, with surrounding
/// whitespace tolerated. Anything else is a fatal validation error that
/// surfaces the raw token.
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(RulescoutError::validation_mismatch(
            format!("Unexpected boolean string '{raw}'"),
            "yes or no",
            raw,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_bool_vocabulary() {
        assert!(parse_bool("yes").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(!parse_bool("No").unwrap());
        assert!(parse_bool("  yes  ").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_other_tokens() {
        for bad in ["maybe", "", "true", "y", "1"] {
            let err = parse_bool(bad).unwrap_err();
            assert!(
                matches!(err, RulescoutError::Validation { .. }),
                "expected Validation error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_bool_error_surfaces_raw_token() {
        let err = parse_bool("enabled").unwrap_err();
        assert!(format!("{err}").contains("Unexpected boolean string 'enabled'"));
    }

    #[test]
    fn test_from_cells_seven_columns() {
        let cells = ["explicit_init", "yes", "yes", "no", "idiomatic", "no", "warning"];
        let rule = Rule::from_cells(&cells).unwrap();

        assert_eq!(rule.identifier, "explicit_init");
        assert!(rule.opt_in);
        assert!(rule.correctable);
        assert!(!rule.enabled);
        assert_eq!(rule.kind, "idiomatic");
        assert!(!rule.analyzer);
        assert_eq!(rule.uses_index, None);
        assert_eq!(rule.configuration, "warning");
    }

    #[test]
    fn test_from_cells_eight_columns() {
        let cells = [
            "unused_import",
            "yes",
            "yes",
            "no",
            "lint",
            "yes",
            "yes",
            "severity: warning",
        ];
        let rule = Rule::from_cells(&cells).unwrap();

        assert!(rule.analyzer);
        assert_eq!(rule.uses_index, Some(true));
        assert_eq!(rule.configuration, "severity: warning");
    }

    #[test]
    fn test_from_cells_wrong_count() {
        let err = Rule::from_cells(&["a", "yes", "no"]).unwrap_err();
        assert!(matches!(err, RulescoutError::Validation { .. }));
    }

    #[test]
    fn test_from_cells_rejects_empty_identifier() {
        let cells = ["  ", "yes", "no", "no", "style", "no", "warning"];
        let err = Rule::from_cells(&cells).unwrap_err();
        assert!(matches!(err, RulescoutError::Validation { .. }));
    }

    #[test]
    fn test_from_cells_trims_fields() {
        let cells = ["  todo  ", " no ", " no ", " yes ", "  lint ", " no ", "  "];
        let rule = Rule::from_cells(&cells).unwrap();
        assert_eq!(rule.identifier, "todo");
        assert_eq!(rule.kind, "lint");
        assert_eq!(rule.configuration, "");
    }

    #[test]
    fn test_named_defaults() {
        let rule = Rule::named(" force_cast ");
        assert_eq!(rule.identifier, "force_cast");
        assert!(!rule.opt_in);
        assert!(!rule.enabled);
        assert!(!rule.analyzer);
        assert_eq!(rule.kind, "");
    }

    #[test]
    fn test_equality_is_identifier_only() {
        let from_table = Rule::from_cells(&[
            "explicit_init",
            "yes",
            "yes",
            "no",
            "idiomatic",
            "no",
            "warning",
        ])
        .unwrap();
        let from_config = Rule::named("explicit_init");

        assert_eq!(from_table, from_config);
    }

    #[test]
    fn test_set_membership_is_identifier_only() {
        let mut rules = HashSet::new();
        rules.insert(Rule::named("force_cast"));

        let other = Rule::from_cells(&["force_cast", "no", "no", "yes", "lint", "no", "error"])
            .unwrap();
        assert!(rules.contains(&other));
        // insert of an equal member keeps the first-seen record
        assert!(!rules.insert(other));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_docs_url() {
        let rule = Rule::named("empty_count");
        assert_eq!(
            rule.docs_url(),
            "https://realm.github.io/SwiftLint/empty_count.html"
        );
    }
}
