//! Pure classification of generated command text.
//!
//! All functions here are total: any string classifies, nothing fails,
//! and the same input always yields the same output. Every rule in the
//! catalog is evaluated; matches are collected, never short-circuited.

use super::rules::{COMPILED_HEURISTICS, DANGER_RULES};
use super::{HeuristicWarning, RiskLevel, Severity};

/// Collect the reason label of every danger rule whose substring occurs
/// in the lower-cased command. Empty means not flagged dangerous.
pub fn danger_reasons(command: &str) -> Vec<&'static str> {
    let lowered = command.to_lowercase();
    DANGER_RULES
        .iter()
        .filter(|(pattern, _)| lowered.contains(*pattern))
        .map(|(_, reason)| *reason)
        .collect()
}

/// A command is safe when no danger rule matches. Drives the dry-run
/// SAFE/UNSAFE verdict.
pub fn is_safe_command(command: &str) -> bool {
    danger_reasons(command).is_empty()
}

/// Collect a warning for every heuristic rule whose pattern matches.
/// Patterns are case-sensitive and independent of the danger table.
pub fn heuristic_warnings(command: &str) -> Vec<HeuristicWarning> {
    COMPILED_HEURISTICS
        .iter()
        .filter(|(re, _, _)| re.is_match(command))
        .map(|(_, message, severity)| HeuristicWarning {
            message: *message,
            severity: *severity,
        })
        .collect()
}

/// Collapse a warning set to one risk level: no warnings is LOW, any
/// HIGH warning is HIGH, anything else is MEDIUM.
pub fn risk_level(warnings: &[HeuristicWarning]) -> RiskLevel {
    if warnings.is_empty() {
        RiskLevel::Low
    } else if warnings.iter().any(|w| w.severity == Severity::High) {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_recursive_delete() {
        assert_eq!(danger_reasons("rm -rf /tmp"), vec!["Recursive delete detected"]);
    }

    #[test]
    fn test_danger_benign_command_is_empty() {
        assert!(danger_reasons("ls -la").is_empty());
        assert!(is_safe_command("ls -la"));
    }

    #[test]
    fn test_danger_match_is_case_insensitive() {
        assert_eq!(danger_reasons("RM -RF /var/log"), vec!["Recursive delete detected"]);
        assert_eq!(danger_reasons("Shutdown -h now"), vec!["System shutdown detected"]);
    }

    #[test]
    fn test_danger_each_rule_matches() {
        let cases = [
            ("mkfs.ext4 /dev/sda1", "Filesystem format detected"),
            ("dd if=/dev/zero of=/dev/sda", "Raw disk write detected"),
            (":(){ :|:& };:", "Fork bomb pattern detected"),
            ("shutdown -h now", "System shutdown detected"),
            ("reboot now", "System reboot detected"),
        ];
        for (command, reason) in cases {
            assert!(
                danger_reasons(command).contains(&reason),
                "expected {reason:?} for {command:?}"
            );
        }
    }

    #[test]
    fn test_danger_collects_all_matches_in_table_order() {
        let reasons = danger_reasons("rm -rf / && mkfs.ext4 /dev/sda && reboot");
        assert_eq!(
            reasons,
            vec![
                "Recursive delete detected",
                "Filesystem format detected",
                "System reboot detected",
            ]
        );
    }

    #[test]
    fn test_heuristic_root_scan_is_high() {
        let warnings = heuristic_warnings("find / -name foo");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "Scans from filesystem root");
        assert_eq!(warnings[0].severity, Severity::High);
    }

    #[test]
    fn test_heuristic_du_at_root() {
        let warnings = heuristic_warnings("du -a /");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::High);
    }

    #[test]
    fn test_heuristic_sudo_is_medium() {
        let warnings = heuristic_warnings("sudo apt update");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "Requests elevated privileges");
        assert_eq!(warnings[0].severity, Severity::Medium);
    }

    #[test]
    fn test_heuristic_benign_command_is_empty() {
        assert!(heuristic_warnings("echo hi").is_empty());
    }

    #[test]
    fn test_heuristic_subdirectory_scan_not_flagged() {
        assert!(heuristic_warnings("find /home/user -name foo").is_empty());
        assert!(heuristic_warnings("du -sh /var").is_empty());
    }

    #[test]
    fn test_heuristic_patterns_are_case_sensitive() {
        assert!(heuristic_warnings("SUDO apt update").is_empty());
    }

    #[test]
    fn test_heuristic_recursive_near_root_literal_match() {
        let warnings = heuristic_warnings("chmod 777 / -R");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "Recursive operation near filesystem root");
        // The literal rule only knows upper-case -R
        assert!(heuristic_warnings("chmod 777 / -r").is_empty());
    }

    #[test]
    fn test_heuristic_multiple_warnings_enumerated() {
        let warnings = heuristic_warnings("sudo find / -name '*.log'");
        assert_eq!(warnings.len(), 2);
        assert_eq!(risk_level(&warnings), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_reduction() {
        assert_eq!(risk_level(&[]), RiskLevel::Low);

        let medium = [HeuristicWarning {
            message: "m",
            severity: Severity::Medium,
        }];
        assert_eq!(risk_level(&medium), RiskLevel::Medium);

        let mixed = [
            HeuristicWarning {
                message: "m",
                severity: Severity::Medium,
            },
            HeuristicWarning {
                message: "h",
                severity: Severity::High,
            },
        ];
        assert_eq!(risk_level(&mixed), RiskLevel::High);
    }

    #[test]
    fn test_classifier_is_idempotent() {
        let command = "sudo rm -rf / && find / -name x";
        assert_eq!(danger_reasons(command), danger_reasons(command));
        assert_eq!(heuristic_warnings(command), heuristic_warnings(command));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
        assert_eq!(RiskLevel::High.to_string(), "HIGH");
        assert_eq!(Severity::Medium.to_string(), "MEDIUM");
        assert_eq!(Severity::High.to_string(), "HIGH");
    }
}
