//! Suggestion rules, one function per resume category.
//!
//! The number of suggestions a category produces drives its sub-score, so each
//! rule set documents its maximum count.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::PersonalInfo;

pub const WELL_OPTIMIZED: &str = "Your resume is well-optimized for ATS systems";

const SUMMARY_MIN_WORDS: usize = 30;
const SUMMARY_MAX_WORDS: usize = 100;
const MIN_SKILLS: usize = 5;
const MIN_KEYWORD_SCORE: f64 = 70.0;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
    static ref BULLET: Regex = Regex::new(r"[•\-\*]").unwrap();
    static ref ACTION_VERB: Regex =
        Regex::new(r"\b(developed|managed|created|implemented|designed|led|improved)\b").unwrap();
    static ref DEGREE: Regex = Regex::new(r"\b(bachelor|master|phd|b\.|m\.|diploma)\b").unwrap();
    static ref GPA: Regex = Regex::new(r"\b(gpa|cgpa|grade|percentage)\b").unwrap();
}

/// Suggestions grouped by category, in reporting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestions {
    pub contact: Vec<String>,
    pub summary: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub format: Vec<String>,
}

impl CategorySuggestions {
    /// Concatenates categories in fixed order: contact, summary, skills,
    /// experience, education, format.
    pub fn flatten(&self) -> Vec<String> {
        [
            &self.contact,
            &self.summary,
            &self.skills,
            &self.experience,
            &self.education,
            &self.format,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

/// At most 3: one per missing email, phone, LinkedIn.
pub fn contact_suggestions(info: &PersonalInfo) -> Vec<String> {
    let mut out = Vec::new();
    if info.email.is_empty() {
        out.push("Add your email address".to_string());
    }
    if info.phone.is_empty() {
        out.push("Add your phone number".to_string());
    }
    if info.linkedin.is_empty() {
        out.push("Add your LinkedIn profile URL".to_string());
    }
    out
}

/// At most 1, by priority: missing, too short, too long.
pub fn summary_suggestions(summary: &str) -> Vec<String> {
    let words = summary.split_whitespace().count();
    let suggestion = if summary.is_empty() {
        Some("Add a professional summary to highlight your key qualifications")
    } else if words < SUMMARY_MIN_WORDS {
        Some("Expand your professional summary to better highlight your experience and goals")
    } else if words > SUMMARY_MAX_WORDS {
        Some("Consider making your summary more concise (aim for 50-75 words)")
    } else {
        None
    };
    suggestion.map(|s| vec![s.to_string()]).unwrap_or_default()
}

/// At most 3. Does not feed the skills sub-score, which is the keyword score.
pub fn skills_suggestions(skills: &BTreeSet<String>, keyword_score: f64) -> Vec<String> {
    let mut out = Vec::new();
    if skills.is_empty() {
        out.push("Add a dedicated skills section".to_string());
    }
    if skills.len() < MIN_SKILLS {
        out.push("List more relevant technical and soft skills".to_string());
    }
    if keyword_score < MIN_KEYWORD_SCORE {
        out.push("Add more skills that match the job requirements".to_string());
    }
    out
}

/// At most 3. A missing section short-circuits the content checks.
pub fn experience_suggestions(experience: &[String]) -> Vec<String> {
    if experience.is_empty() {
        return vec!["Add your work experience section".to_string()];
    }

    let mut out = Vec::new();
    if !experience.iter().any(|e| YEAR.is_match(e)) {
        out.push("Include dates for each work experience".to_string());
    }
    if !experience.iter().any(|e| BULLET.is_match(e)) {
        out.push("Use bullet points to list your achievements and responsibilities".to_string());
    }
    if !experience
        .iter()
        .any(|e| ACTION_VERB.is_match(&e.to_lowercase()))
    {
        out.push("Start bullet points with strong action verbs".to_string());
    }
    out
}

/// At most 3. A missing section short-circuits the content checks.
pub fn education_suggestions(education: &[String], require_gpa: bool) -> Vec<String> {
    if education.is_empty() {
        return vec!["Add your educational background".to_string()];
    }

    let mut out = Vec::new();
    if !education.iter().any(|e| YEAR.is_match(e)) {
        out.push("Include graduation dates".to_string());
    }
    if !education.iter().any(|e| DEGREE.is_match(&e.to_lowercase())) {
        out.push("Specify your degree type".to_string());
    }
    if require_gpa && !education.iter().any(|e| GPA.is_match(&e.to_lowercase())) {
        out.push("Include your GPA if it's above 3.0".to_string());
    }
    out
}
