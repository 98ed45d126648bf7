//! ATS resume analysis engine.
//!
//! Takes plain resume text plus a job's requirements and returns a fully typed
//! [`AnalysisResult`]: document classification, extracted sections, keyword
//! match, formatting report, sub-scores, the weighted ATS score and prioritized
//! suggestions. No I/O happens inside the engine; file parsing, storage and
//! transport belong to the host.

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod errors;
pub mod extract;
pub mod keywords;
pub mod models;
pub mod scoring;
pub mod telemetry;

pub use analyzer::{analyze, ResumeAnalyzer};
pub use classify::{ClassificationResult, DocumentType};
pub use config::AnalyzerConfig;
pub use errors::AnalyzerError;
pub use extract::{PersonalInfo, SkillSplitMode};
pub use models::{AnalysisResult, ExtractedSections, JobRequirements};
pub use scoring::{FormatReport, KeywordMatchResult, SkillMatcher};
