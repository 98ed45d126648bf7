//! Analysis orchestrator — sequences classification, extraction, matching,
//! formatting and aggregation into one `analyze` call.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classify::{classify, DocumentType};
use crate::config::AnalyzerConfig;
use crate::errors::AnalyzerError;
use crate::extract::{
    extract_personal_info, extract_skills, extract_summary, PersonalInfo, SectionExtractor,
};
use crate::keywords::{KeywordTables, KEYWORD_TABLES};
use crate::models::{AnalysisResult, ExtractedSections, JobRequirements};
use crate::scoring::suggestions::{
    contact_suggestions, education_suggestions, experience_suggestions, skills_suggestions,
    summary_suggestions, WELL_OPTIMIZED,
};
use crate::scoring::{
    check_formatting, compute_section_coverage, CategorySuggestions, LiteralSkillMatcher,
    SectionScores, SkillMatcher,
};

pub const EMPTY_INPUT_MESSAGE: &str =
    "No text provided for analysis. Please upload a valid resume.";

/// Stateless analyzer. Cheap to clone and safe to share across threads; every
/// call reads only its arguments and the immutable keyword tables.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    config: Arc<AnalyzerConfig>,
    tables: &'static KeywordTables,
    /// Pluggable matcher. Default: LiteralSkillMatcher.
    matcher: Arc<dyn SkillMatcher>,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self {
            config: Arc::new(AnalyzerConfig::default()),
            tables: &KEYWORD_TABLES,
            matcher: Arc::new(LiteralSkillMatcher),
        }
    }
}

impl ResumeAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            ..Self::default()
        })
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn SkillMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes plain resume text against a job's requirements.
    ///
    /// Never fails: empty input and non-resume documents produce an all-zero
    /// result with a single explanatory suggestion.
    pub fn analyze(&self, text: &str, requirements: &JobRequirements) -> AnalysisResult {
        if text.is_empty() {
            warn!("empty text submitted for analysis");
            return AnalysisResult::degenerate(
                DocumentType::Unknown,
                0.0,
                PersonalInfo::default(),
                EMPTY_INPUT_MESSAGE.to_string(),
                self.matcher.backend(),
            );
        }

        let personal_info = extract_personal_info(text);

        let classification = classify(
            text,
            &self.tables.document_types,
            self.config.classification_threshold,
        );
        if classification.doc_type != DocumentType::Resume {
            warn!(
                doc_type = %classification.doc_type,
                score = classification.score,
                "document is not a resume; skipping analysis"
            );
            return AnalysisResult::degenerate(
                classification.doc_type,
                classification.score,
                personal_info,
                format!(
                    "This appears to be a {} document. Please upload a resume for ATS analysis.",
                    classification.doc_type
                ),
                self.matcher.backend(),
            );
        }

        let keyword_match = self
            .matcher
            .match_skills(text, &requirements.required_skills);

        let sections = ExtractedSections {
            education: SectionExtractor::new(&self.tables.education).extract(text),
            experience: SectionExtractor::new(&self.tables.experience).extract(text),
            projects: SectionExtractor::new(&self.tables.projects).extract(text),
            skills: extract_skills(text, &self.tables.skills, self.config.skill_split_mode),
            summary: extract_summary(text, &self.tables.summary),
        };
        debug!(
            education = sections.education.len(),
            experience = sections.experience.len(),
            projects = sections.projects.len(),
            skills = sections.skills.len(),
            summary_words = sections.summary.split_whitespace().count(),
            "sections extracted"
        );

        let section_coverage = compute_section_coverage(text);
        let format = check_formatting(text);
        debug!(score = format.score, deductions = ?format.deductions, "format checked");

        let category_suggestions = CategorySuggestions {
            contact: contact_suggestions(&personal_info),
            summary: summary_suggestions(&sections.summary),
            skills: skills_suggestions(&sections.skills, keyword_match.score),
            experience: experience_suggestions(&sections.experience),
            education: education_suggestions(&sections.education, requirements.require_gpa),
            format: format.deductions.clone(),
        };

        let scores = SectionScores::from_suggestions(
            &category_suggestions,
            keyword_match.score,
            format.score,
        );
        let ats_score = scores.ats_score(&self.config.weights);

        let mut suggestions = category_suggestions.flatten();
        if suggestions.is_empty() {
            suggestions.push(WELL_OPTIMIZED.to_string());
        }

        info!(
            ats_score,
            keyword_score = keyword_match.score,
            format_score = format.score,
            suggestions = suggestions.len(),
            "resume analyzed"
        );

        AnalysisResult {
            document_type: classification.doc_type,
            classification_score: classification.score,
            personal_info,
            sections,
            keyword_match,
            format,
            section_coverage,
            category_suggestions,
            section_scores: scores.to_map(),
            ats_score,
            suggestions,
            matcher_backend: self.matcher.backend().to_string(),
        }
    }
}

/// Analyzes with the default configuration.
pub fn analyze(text: &str, requirements: &JobRequirements) -> AnalysisResult {
    ResumeAnalyzer::default().analyze(text, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SkillSplitMode;
    use crate::scoring::KeywordMatchResult;

    const JANE: &str = "Jane Doe\njane@example.com\n555-123-4567\nSUMMARY\nExperienced backend engineer with five years building scalable APIs and leading small teams across multiple product launches.\nEXPERIENCE\nSenior Engineer, Acme Corp, 2019-2023\n• Developed microservices handling 10k req/s\nEDUCATION\nB.Tech Computer Science, 2015-2019\nSKILLS\nPython, SQL, Leadership";

    fn jane_requirements() -> JobRequirements {
        JobRequirements::with_skills(["Python", "SQL", "Communication"])
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let result = analyze("", &jane_requirements());
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.document_type, DocumentType::Unknown);
        assert_eq!(result.suggestions, vec![EMPTY_INPUT_MESSAGE]);
    }

    #[test]
    fn test_whitespace_only_text_is_an_unknown_document() {
        let result = analyze("  \n ", &jane_requirements());
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.document_type, DocumentType::Unknown);
        assert_eq!(result.classification_score, 0.0);
        assert_eq!(result.personal_info, PersonalInfo::default());
        let expected =
            "This appears to be a unknown document. Please upload a resume for ATS analysis.";
        assert_eq!(result.suggestions, vec![expected]);
    }

    #[test]
    fn test_marksheet_is_gated() {
        let result = analyze(
            "Semester result CGPA 8.5 examination academic year",
            &jane_requirements(),
        );
        assert_eq!(result.document_type, DocumentType::Marksheet);
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].contains("marksheet"));
        assert!(result.keyword_match.found.is_empty());
    }

    #[test]
    fn test_jane_doe_scores() {
        let result = analyze(JANE, &jane_requirements());
        assert!(result.is_resume());
        assert_eq!(result.section_scores["contact"], 75.0);
        assert_eq!(result.section_scores["summary"], 67.0);
        assert_eq!(result.section_scores["experience"], 100.0);
        assert_eq!(result.section_scores["education"], 100.0);
        assert_eq!(result.section_scores["format"], 100.0);
        assert!((result.section_scores["skills"] - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.ats_score, 85);
    }

    #[test]
    fn test_split_mode_flows_from_config() {
        let analyzer = ResumeAnalyzer::new(AnalyzerConfig {
            skill_split_mode: SkillSplitMode::Recursive,
            ..AnalyzerConfig::default()
        })
        .unwrap();
        let text = format!("{JANE} | Go");
        let result = analyzer.analyze(&text, &jane_requirements());
        assert!(result.sections.skills.contains("SQL"));
        assert!(result.sections.skills.contains("Go"));
        assert!(!result.sections.skills.contains("Leadership | Go"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig {
            classification_threshold: -0.1,
            ..AnalyzerConfig::default()
        };
        assert!(ResumeAnalyzer::new(config).is_err());
    }

    struct EverythingMatcher;

    impl SkillMatcher for EverythingMatcher {
        fn match_skills(&self, _text: &str, required_skills: &[String]) -> KeywordMatchResult {
            KeywordMatchResult {
                score: 100.0,
                found: required_skills.to_vec(),
                missing: vec![],
            }
        }

        fn backend(&self) -> &'static str {
            "everything"
        }
    }

    #[test]
    fn test_custom_matcher_is_used() {
        let analyzer = ResumeAnalyzer::default().with_matcher(Arc::new(EverythingMatcher));
        let result = analyzer.analyze(JANE, &jane_requirements());
        assert_eq!(result.matcher_backend, "everything");
        assert_eq!(result.keyword_match.missing.len(), 0);
        assert_eq!(result.section_scores["skills"], 100.0);
    }
}
