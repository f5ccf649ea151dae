//! Border-relative parser for the `swiftlint rules` output table.
//!
//! The listing is a fixed-width text table bounded by border lines
//! (`+---+---+ ...`) with `|`-separated cells. Tool versions differ in how
//! many banner lines precede the table and in whether rows carry 7 or 8
//! columns, so the scan is driven by the borders themselves rather than by
//! absolute line offsets. The scan is a small state machine:
//!
//! ```text
//! BeforeHeader --border--> InHeader --border--> InBody --border--> Done
//! ```
//!
//! Body rows must all share one arity, locked from the first row and
//! required to be 7 or 8. Any deviation is a fatal error carrying the
//! offending line verbatim; skipping a malformed row could silently hide
//! rules from the report.

use std::collections::HashSet;

use tracing::warn;

use crate::core::errors::{Result, RulescoutError};
use crate::core::rules::Rule;

/// Prefix that marks a horizontal border line.
const BORDER_MARKER: &str = "+-";

/// Cell separator within a body row.
const COLUMN_SEPARATOR: char = '|';

/// Column arities the known tool versions produce.
const SUPPORTED_ARITIES: [usize; 2] = [7, 8];

/// Scanner position relative to the table borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Banner text before the first border line
    BeforeHeader,
    /// Header row(s) between the first and second borders
    InHeader,
    /// Body rows between the second and closing borders
    InBody,
    /// Past the closing border; remaining lines are ignored
    Done,
}

/// Parse the full rule listing into records, in row order.
///
/// Yields exactly one [`Rule`] per body row. Returns an error if any row
/// deviates from the locked column arity or contains an unparseable
/// boolean token.
pub fn parse_rules(output: &str) -> Result<Vec<Rule>> {
    let mut state = ScanState::BeforeHeader;
    let mut expected_arity: Option<usize> = None;
    let mut rules = Vec::new();

    for line in output.lines() {
        let is_border = line.starts_with(BORDER_MARKER);

        match state {
            ScanState::BeforeHeader => {
                if is_border {
                    state = ScanState::InHeader;
                }
            }
            ScanState::InHeader => {
                if is_border {
                    state = ScanState::InBody;
                }
            }
            ScanState::InBody => {
                if is_border {
                    state = ScanState::Done;
                    continue;
                }
                rules.push(parse_row(line, &mut expected_arity)?);
            }
            ScanState::Done => break,
        }
    }

    if state == ScanState::BeforeHeader {
        warn!("no rule table found in the listing output");
    }

    Ok(rules)
}

/// Parse the rule listing and keep only the disabled rules.
///
/// On duplicate identifiers the first-seen record wins; later rows with
/// the same identifier are dropped.
pub fn parse_disabled_rules(output: &str) -> Result<HashSet<Rule>> {
    let mut disabled = HashSet::new();
    for rule in parse_rules(output)? {
        if !rule.enabled {
            disabled.insert(rule);
        }
    }
    Ok(disabled)
}

/// Split one body row into cells and build its record.
///
/// Cells are `|`-separated and space-padded; the empty fragments produced
/// by the leading and trailing border separators are discarded before
/// trimming, so a padded-but-blank cell still counts toward the arity.
fn parse_row(line: &str, expected_arity: &mut Option<usize>) -> Result<Rule> {
    let cells: Vec<&str> = line
        .split(COLUMN_SEPARATOR)
        .filter(|cell| !cell.is_empty())
        .map(str::trim)
        .collect();

    match *expected_arity {
        None => {
            if !SUPPORTED_ARITIES.contains(&cells.len()) {
                return Err(RulescoutError::table(
                    format!(
                        "Expected the rule listing to be formatted on 7 or 8 columns, found {}",
                        cells.len()
                    ),
                    line,
                ));
            }
            *expected_arity = Some(cells.len());
        }
        Some(arity) => {
            if cells.len() != arity {
                return Err(RulescoutError::table(
                    format!(
                        "Expected the rule listing to be formatted on {arity} columns, found {}",
                        cells.len()
                    ),
                    line,
                ));
            }
        }
    }

    Rule::from_cells(&cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDER: &str = "+------------+--------+-------------+---------+-------+----------+---------------+";

    /// Render rows into a bordered table the way `swiftlint rules` does.
    fn table(rows: &[&str]) -> String {
        let mut out = String::new();
        out.push_str(BORDER);
        out.push('\n');
        out.push_str("| identifier | opt-in | correctable | enabled | kind  | analyzer | configuration |\n");
        out.push_str(BORDER);
        out.push('\n');
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(BORDER);
        out.push('\n');
        out
    }

    #[test]
    fn test_parses_each_body_row_in_order() {
        let input = table(&[
            "| attributes | yes | yes | no | style | no | warning |",
            "| empty_count | yes | no | no | performance | no | severity: warning |",
            "| force_cast | no | no | yes | idiomatic | no | error |",
        ]);

        let rules = parse_rules(&input).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].identifier, "attributes");
        assert_eq!(rules[1].identifier, "empty_count");
        assert_eq!(rules[2].identifier, "force_cast");
        assert_eq!(rules[1].configuration, "severity: warning");
    }

    #[test]
    fn test_eight_column_listing() {
        let input = table(&[
            "| unused_import | yes | yes | no | lint | yes | yes | severity: warning |",
            "| attributes | yes | yes | no | style | no | no | warning |",
        ]);

        let rules = parse_rules(&input).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].uses_index, Some(true));
        assert_eq!(rules[1].uses_index, Some(false));
    }

    #[test]
    fn test_banner_lines_before_table_are_skipped() {
        let mut input = String::from("Loading configuration...\nLinting Swift files\n\n");
        input.push_str(&table(&[
            "| attributes | yes | yes | no | style | no | warning |",
        ]));

        let rules = parse_rules(&input).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].identifier, "attributes");
    }

    #[test]
    fn test_footer_after_closing_border_is_ignored() {
        let mut input = table(&[
            "| attributes | yes | yes | no | style | no | warning |",
        ]);
        input.push_str("Done listing 1 rule\n");

        let rules = parse_rules(&input).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_arity_mismatch_is_fatal_and_carries_the_line() {
        let bad_row = "| attributes | yes | no | style |";
        let input = table(&[
            "| empty_count | yes | no | no | performance | no | warning |",
            bad_row,
        ]);

        let err = parse_rules(&input).unwrap_err();
        match err {
            RulescoutError::Table { line, message } => {
                assert_eq!(line, bad_row);
                assert!(message.contains("7 columns"));
            }
            other => panic!("expected Table error, got {other:?}"),
        }
    }

    #[test]
    fn test_first_row_locks_the_arity() {
        // first row is 7-column, second is 8-column
        let eight = "| unused_import | yes | yes | no | lint | yes | yes | warning |";
        let input = table(&[
            "| attributes | yes | yes | no | style | no | warning |",
            eight,
        ]);

        let err = parse_rules(&input).unwrap_err();
        assert!(matches!(err, RulescoutError::Table { .. }));
    }

    #[test]
    fn test_unsupported_arity_on_first_row() {
        let input = table(&["| attributes | yes | no |"]);

        let err = parse_rules(&input).unwrap_err();
        match err {
            RulescoutError::Table { message, .. } => {
                assert!(message.contains("7 or 8 columns"));
            }
            other => panic!("expected Table error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_boolean_token_is_fatal() {
        let input = table(&[
            "| attributes | maybe | yes | no | style | no | warning |",
        ]);

        let err = parse_rules(&input).unwrap_err();
        assert!(matches!(err, RulescoutError::Validation { .. }));
    }

    #[test]
    fn test_blank_padded_cell_counts_toward_arity() {
        let input = table(&[
            "| attributes | yes | yes | no | style | no |  |",
        ]);

        let rules = parse_rules(&input).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].configuration, "");
    }

    #[test]
    fn test_empty_body_yields_no_rules() {
        let rules = parse_rules(&table(&[])).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_no_table_yields_no_rules() {
        let rules = parse_rules("nothing that looks like a table\n").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_disabled_filter() {
        let input = table(&[
            "| attributes | yes | yes | no | style | no | warning |",
            "| force_cast | no | no | yes | idiomatic | no | error |",
            "| empty_count | yes | no | no | performance | no | warning |",
        ]);

        let disabled = parse_disabled_rules(&input).unwrap();
        assert_eq!(disabled.len(), 2);
        assert!(disabled.contains(&Rule::named("attributes")));
        assert!(disabled.contains(&Rule::named("empty_count")));
        assert!(!disabled.contains(&Rule::named("force_cast")));
    }

    #[test]
    fn test_duplicate_identifier_keeps_first_record() {
        let input = table(&[
            "| attributes | yes | yes | no | style | no | warning |",
            "| attributes | no | no | no | lint | no | error |",
        ]);

        let disabled = parse_disabled_rules(&input).unwrap();
        assert_eq!(disabled.len(), 1);
        let kept = disabled.get(&Rule::named("attributes")).unwrap();
        assert_eq!(kept.kind, "style");
        assert!(kept.opt_in);
    }
}
