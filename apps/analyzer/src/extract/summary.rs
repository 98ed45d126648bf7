//! Summary extraction — an implicit leading paragraph plus any explicit
//! summary/objective section.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::section::SectionExtractor;
use crate::keywords::{contains_any, SectionSpec};

/// Leading blank lines skipped before looking for an implicit summary.
const MAX_LEADING_BLANKS: usize = 10;
/// Non-blank lines considered for an implicit summary.
const IMPLICIT_SUMMARY_LINES: usize = 5;
/// An implicit summary must be longer than this many words.
const MIN_IMPLICIT_WORDS: usize = 10;

lazy_static! {
    /// Words that mark a leading block as contact details rather than prose.
    static ref CONTACT_WORDS: Regex =
        Regex::new(r"\b(?:email|phone|address|tel|mobile|linkedin)\b").unwrap();
}

/// Extracts the summary as a single string (empty when none is found).
pub fn extract_summary(text: &str, spec: &SectionSpec) -> String {
    let mut pieces = Vec::new();

    if let Some(implicit) = implicit_summary(text, spec) {
        pieces.push(implicit);
    }

    SectionExtractor::new(spec).scan_with(text, |entry| pieces.push(entry));

    pieces.join(" ")
}

/// The first few non-blank lines, when they read like a prose introduction.
fn implicit_summary(text: &str, spec: &SectionSpec) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut start = 0;
    while start < lines.len().min(MAX_LEADING_BLANKS) && lines[start].trim().is_empty() {
        start += 1;
    }

    let first_lines: Vec<&str> = lines[start..]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .take(IMPLICIT_SUMMARY_LINES)
        .collect();

    let first = first_lines.first()?;
    if contains_any(&first.to_lowercase(), spec.keywords) {
        return None;
    }

    let candidate = first_lines.join(" ");
    if candidate.split_whitespace().count() <= MIN_IMPLICIT_WORDS {
        return None;
    }
    if CONTACT_WORDS.is_match(&candidate.to_lowercase()) {
        return None;
    }

    Some(candidate)
}
