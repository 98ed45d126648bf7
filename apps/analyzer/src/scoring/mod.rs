// Scoring: keyword matching, formatting heuristics, section coverage,
// per-category suggestions and the weighted ATS aggregate.

pub mod aggregate;
pub mod coverage;
pub mod format;
pub mod keyword_match;
pub mod suggestions;

pub use aggregate::{ScoreWeights, SectionScores};
pub use coverage::{compute_section_coverage, CoverageReport};
pub use format::{check_formatting, FormatReport};
pub use keyword_match::{
    compute_keyword_match, KeywordMatchResult, LiteralSkillMatcher, SkillMatcher,
};
pub use suggestions::CategorySuggestions;
