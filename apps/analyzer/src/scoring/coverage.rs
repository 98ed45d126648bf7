use serde::{Deserialize, Serialize};

use crate::keywords::COVERAGE_SECTIONS;

/// Points available per essential section.
const SECTION_POINTS: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub section: String,
    pub score: f64,
    pub keywords_found: usize,
}

/// Vocabulary coverage of the four essential sections, 0 – 100.
/// Informational only; it does not feed the ATS score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub score: f64,
    pub sections: Vec<SectionPresence>,
    pub missing_sections: Vec<String>,
}

pub fn compute_section_coverage(text: &str) -> CoverageReport {
    let lower = text.to_lowercase();
    let mut sections = Vec::new();
    let mut missing_sections = Vec::new();
    let mut total = 0.0;

    for (section, keywords) in COVERAGE_SECTIONS {
        let found = keywords.iter().filter(|k| lower.contains(*k)).count();
        let score = (found as f64 / keywords.len() as f64 * SECTION_POINTS).min(SECTION_POINTS);

        if found == 0 {
            missing_sections.push(section.to_string());
        }

        total += score;
        sections.push(SectionPresence {
            section: section.to_string(),
            score,
            keywords_found: found,
        });
    }

    CoverageReport {
        score: total,
        sections,
        missing_sections,
    }
}
