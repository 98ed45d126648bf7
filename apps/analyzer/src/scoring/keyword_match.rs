//! Keyword Matching — pluggable, trait-based matcher that measures resume text
//! against a job's required skills.
//!
//! Default: `LiteralSkillMatcher` (case-insensitive substring, deterministic).
//!
//! `ResumeAnalyzer` holds an `Arc<dyn SkillMatcher>`, swapped at construction.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Partition of the required skills into found and missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub score: f64, // 0 – 100
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the analyzer.
pub trait SkillMatcher: Send + Sync {
    fn match_skills(&self, text: &str, required_skills: &[String]) -> KeywordMatchResult;

    /// Label reported for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LiteralSkillMatcher — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive literal matcher.
///
/// Algorithm, per required skill (output keeps the caller's casing and order):
/// 1. lowercased skill is a substring of the lowercased document → found
/// 2. else it is a substring of any `.`-separated segment → found
/// 3. else → missing
///
/// score = 100 × |found| / |required|, or 0 for an empty list.
pub struct LiteralSkillMatcher;

impl SkillMatcher for LiteralSkillMatcher {
    fn match_skills(&self, text: &str, required_skills: &[String]) -> KeywordMatchResult {
        compute_keyword_match(text, required_skills)
    }

    fn backend(&self) -> &'static str {
        "literal"
    }
}

pub fn compute_keyword_match(text: &str, required_skills: &[String]) -> KeywordMatchResult {
    if required_skills.is_empty() {
        return KeywordMatchResult::default();
    }

    let lower = text.to_lowercase();
    let segments: Vec<&str> = lower.split('.').collect();

    let mut found = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        let skill_lower = skill.to_lowercase();
        let matched =
            lower.contains(&skill_lower) || segments.iter().any(|s| s.contains(&skill_lower));

        if matched {
            found.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let score = found.len() as f64 / required_skills.len() as f64 * 100.0;

    KeywordMatchResult {
        score,
        found,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
