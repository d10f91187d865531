//! Static rule catalog for command risk checks.
//!
//! Two independent tables: blocking danger rules (substring, matched
//! case-insensitively) and heuristic risk rules (regex with a fixed
//! severity). Adding a rule is a data edit; the classifier iterates
//! whatever these tables contain.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Severity;

/// Danger rules: (lower-case substring, reason label).
pub(super) const DANGER_RULES: &[(&str, &str)] = &[
    ("rm -rf", "Recursive delete detected"),
    ("mkfs", "Filesystem format detected"),
    ("dd if=", "Raw disk write detected"),
    (":(){", "Fork bomb pattern detected"),
    ("shutdown", "System shutdown detected"),
    ("reboot", "System reboot detected"),
];

/// Heuristic rules: (pattern, warning message, severity).
///
/// Patterns are case-sensitive. The `/ -R` rule is a loose literal match:
/// it misses `-r` and `--recursive`, and fires on any slash followed by
/// ` -R` regardless of what the slash refers to. Known limitation.
const HEURISTIC_RULES: &[(&str, &str, Severity)] = &[
    (
        r"\b(find|du)\b.*\s+/(\s|$)",
        "Scans from filesystem root",
        Severity::High,
    ),
    (
        r"\bsudo\b",
        "Requests elevated privileges",
        Severity::Medium,
    ),
    (
        r"/ -R",
        "Recursive operation near filesystem root",
        Severity::High,
    ),
];

pub(super) static COMPILED_HEURISTICS: Lazy<Vec<(Regex, &'static str, Severity)>> =
    Lazy::new(|| {
        HEURISTIC_RULES
            .iter()
            .map(|(pattern, message, severity)| match Regex::new(pattern) {
                Ok(re) => (re, *message, *severity),
                Err(e) => panic!("invalid heuristic rule pattern {pattern:?}: {e}"),
            })
            .collect()
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_heuristic_patterns_compile() {
        assert_eq!(COMPILED_HEURISTICS.len(), HEURISTIC_RULES.len());
    }
}
