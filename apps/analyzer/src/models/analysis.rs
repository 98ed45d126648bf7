use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::classify::DocumentType;
use crate::extract::PersonalInfo;
use crate::scoring::{
    CategorySuggestions, CoverageReport, FormatReport, KeywordMatchResult, SectionScores,
};

/// Structured content pulled out of the resume text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSections {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: BTreeSet<String>,
    pub summary: String,
}

/// Full analysis returned to callers. Assembled once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub classification_score: f64,
    pub personal_info: PersonalInfo,
    pub sections: ExtractedSections,
    pub keyword_match: KeywordMatchResult,
    pub format: FormatReport,
    pub section_coverage: CoverageReport,
    pub category_suggestions: CategorySuggestions,
    pub section_scores: BTreeMap<String, f64>,
    pub ats_score: u32, // 0 – 100
    pub suggestions: Vec<String>,
    pub matcher_backend: String,
}

impl AnalysisResult {
    /// All-zero result carrying a single explanatory suggestion. Used for empty
    /// input and non-resume documents.
    pub fn degenerate(
        document_type: DocumentType,
        classification_score: f64,
        personal_info: PersonalInfo,
        message: String,
        matcher_backend: &str,
    ) -> Self {
        Self {
            document_type,
            classification_score,
            personal_info,
            sections: ExtractedSections::default(),
            keyword_match: KeywordMatchResult::default(),
            format: FormatReport::default(),
            section_coverage: CoverageReport::default(),
            category_suggestions: CategorySuggestions::default(),
            section_scores: SectionScores::default().to_map(),
            ats_score: 0,
            suggestions: vec![message],
            matcher_backend: matcher_backend.to_string(),
        }
    }

    pub fn is_resume(&self) -> bool {
        self.document_type == DocumentType::Resume
    }
}
