//! Formatting heuristics: length, headers, bullets, spacing, contact patterns.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_LENGTH_CHARS: usize = 300;
const BULLET_MARKERS: &[char] = &['•', '-', '*', '→'];

pub const TOO_SHORT: &str = "Resume is too short";
pub const NO_HEADERS: &str = "No clear section headers found";
pub const NO_BULLETS: &str = "No bullet points found for listing details";
pub const DOUBLE_BLANK: &str = "Inconsistent spacing between sections";
pub const NO_CONTACT: &str = "Missing or improperly formatted contact information";

lazy_static! {
    static ref CONTACT_PATTERNS: [Regex; 3] = [
        Regex::new(r"\b[\w\.-]+@[\w\.-]+\.\w+\b").unwrap(),
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        Regex::new(r"linkedin\.com/\w+").unwrap(),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    pub score: f64,
    /// Human-readable reasons, in detection order.
    pub deductions: Vec<String>,
}

/// Scores formatting from 100 down. Deductions are independent of each other.
pub fn check_formatting(text: &str) -> FormatReport {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut score: i32 = 100;
    let mut deductions = Vec::new();

    let mut deduct = |points: i32, reason: &str| {
        score -= points;
        deductions.push(reason.to_string());
    };

    if text.chars().count() < MIN_LENGTH_CHARS {
        deduct(30, TOO_SHORT);
    }

    if !lines.iter().any(|l| is_upper(l)) {
        deduct(20, NO_HEADERS);
    }

    if !lines.iter().any(|l| l.trim().starts_with(BULLET_MARKERS)) {
        deduct(20, NO_BULLETS);
    }

    if lines
        .windows(2)
        .any(|pair| pair[0].trim().is_empty() && pair[1].trim().is_empty())
    {
        deduct(15, DOUBLE_BLANK);
    }

    if !CONTACT_PATTERNS.iter().any(|p| p.is_match(text)) {
        deduct(15, NO_CONTACT);
    }

    FormatReport {
        score: f64::from(score.max(0)),
        deductions,
    }
}

/// A line reads as a header when it has at least one cased character and no
/// lowercase ones.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_resume() -> String {
        let mut text = String::from("JANE DOE\njane@example.com\n\nEXPERIENCE\n");
        for i in 0..10 {
            let line = format!("• Shipped feature number {i} for the payments team\n");
            text.push_str(&line);
        }
        text
    }

    #[test]
    fn test_well_formatted_resume_scores_100() {
        let report = check_formatting(&long_resume());
        assert_eq!(report.score, 100.0);
        assert!(report.deductions.is_empty());
    }

    #[test]
    fn test_short_text_is_flagged() {
        let text = "x".repeat(50);
        let report = check_formatting(&text);
        assert!(report.deductions.contains(&TOO_SHORT.to_string()));
        assert!(report.score <= 70.0);
    }

    #[test]
    fn test_all_deductions_in_detection_order() {
        let report = check_formatting("hello\n\n\nworld");
        assert_eq!(
            report.deductions,
            vec![TOO_SHORT, NO_HEADERS, NO_BULLETS, DOUBLE_BLANK, NO_CONTACT]
        );
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_upper_line_detection() {
        assert!(is_upper("SKILLS & TOOLS 2024"));
        assert!(!is_upper("Skills"));
        assert!(!is_upper("2024 - 2025"));
        assert!(!is_upper(""));
    }

    #[test]
    fn test_bullet_after_indentation_counts() {
        let report = check_formatting("   * indented bullet");
        assert!(!report.deductions.contains(&NO_BULLETS.to_string()));
    }

    #[test]
    fn test_trailing_double_newline_is_inconsistent_spacing() {
        let report = check_formatting("SUMMARY\n- a\n\n");
        assert!(report.deductions.contains(&DOUBLE_BLANK.to_string()));
    }

    #[test]
    fn test_any_contact_pattern_suffices() {
        let report = check_formatting("see linkedin.com/janedoe");
        assert!(!report.deductions.contains(&NO_CONTACT.to_string()));
        let report = check_formatting("call 555.123.4567");
        assert!(!report.deductions.contains(&NO_CONTACT.to_string()));
    }
}
