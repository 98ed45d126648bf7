//! Contact details and a best-effort name guess.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::keywords::NON_NAME_HEADERS;

pub const UNKNOWN_NAME: &str = "Unknown";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+").unwrap();

    /// Optional country code, optional parentheses, `-`/`.`/space separators.
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"(\+\d{1,3}[-.]?)?\s*\(?\d{3}\)?[-.]?\s*\d{3}[-.]?\s*\d{4}").unwrap();

    static ref LINKEDIN_PATTERN: Regex = Regex::new(r"linkedin\.com/in/[\w-]+").unwrap();

    static ref GITHUB_PATTERN: Regex = Regex::new(r"github\.com/[\w-]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    /// No extraction rule exists yet; always empty.
    pub portfolio: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            portfolio: String::new(),
        }
    }
}

/// Extracts contact fields with fixed patterns. Absent fields are empty strings.
pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: guess_name(text),
        email: first_match(&EMAIL_PATTERN, text),
        phone: first_match(&PHONE_PATTERN, text),
        linkedin: first_match(&LINKEDIN_PATTERN, text),
        github: first_match(&GITHUB_PATTERN, text),
        portfolio: String::new(),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// First non-blank line, unless it is a bare section header.
fn guess_name(text: &str) -> String {
    let first = text.split('\n').map(str::trim).find(|l| !l.is_empty());

    match first {
        Some(line) if !NON_NAME_HEADERS.contains(&line.to_lowercase().as_str()) => line.to_string(),
        _ => UNKNOWN_NAME.to_string(),
    }
}
