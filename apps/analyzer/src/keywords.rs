//! Keyword tables — the immutable vocabulary every heuristic reads from.
//!
//! Built once per process and shared by reference. Nothing in the engine
//! mutates these after initialization.

use lazy_static::lazy_static;

use crate::classify::DocumentType;

/// Keyword phrases for one section kind, plus the other-section vocabulary that
/// ends it.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub other_sections: &'static [&'static str],
}

/// The full keyword configuration: document types plus the five section specs.
#[derive(Debug)]
pub struct KeywordTables {
    pub document_types: Vec<(DocumentType, &'static [&'static str])>,
    pub education: SectionSpec,
    pub experience: SectionSpec,
    pub projects: SectionSpec,
    pub skills: SectionSpec,
    pub summary: SectionSpec,
}

pub const RESUME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "project",
    "objective",
    "summary",
    "employment",
    "qualification",
    "achievements",
];

pub const MARKSHEET_KEYWORDS: &[&str] = &[
    "grade",
    "marks",
    "score",
    "semester",
    "cgpa",
    "sgpa",
    "examination",
    "result",
    "academic year",
    "percentage",
];

pub const CERTIFICATE_KEYWORDS: &[&str] = &[
    "certificate",
    "certification",
    "awarded",
    "completed",
    "achievement",
    "training",
    "course completion",
    "qualified",
];

pub const ID_CARD_KEYWORDS: &[&str] = &[
    "id card",
    "identity",
    "student id",
    "employee id",
    "valid until",
    "date of issue",
    "identification",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "academic",
    "qualification",
    "degree",
    "university",
    "college",
    "school",
    "institute",
    "certification",
    "diploma",
    "bachelor",
    "master",
    "phd",
    "b.tech",
    "m.tech",
    "b.e",
    "m.e",
    "b.sc",
    "m.sc",
    "bca",
    "mca",
    "b.com",
    "m.com",
    "b.cs-it",
    "imca",
    "bba",
    "mba",
    "honors",
    "scholarship",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
    "work experience",
    "career history",
    "professional background",
    "employment history",
    "job history",
    "positions held",
    "job title",
    "job responsibilities",
    "job description",
    "job summary",
];

pub const PROJECT_KEYWORDS: &[&str] = &[
    "projects",
    "personal projects",
    "academic projects",
    "key projects",
    "major projects",
    "professional projects",
    "project experience",
    "relevant projects",
    "featured projects",
    "latest projects",
    "top projects",
];

pub const SKILL_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "competencies",
    "expertise",
    "core competencies",
    "professional skills",
    "key skills",
    "technical expertise",
    "proficiencies",
    "qualifications",
    "top skills",
    "key skill",
    "major skill",
    "personal skill",
    "soft skills",
    "soft skill",
    "soft skillset",
];

pub const SUMMARY_KEYWORDS: &[&str] = &[
    "summary",
    "professional summary",
    "career summary",
    "objective",
    "career objective",
    "professional objective",
    "about me",
    "profile",
    "professional profile",
    "career profile",
    "overview",
    "skill summary",
];

/// First-line values that are section headers, not names.
pub const NON_NAME_HEADERS: &[&str] =
    &["education", "experience", "skills", "summary", "objective"];

/// Ordered separators used to split a skills entry into individual skills.
pub const SKILL_SEPARATORS: &[char] = &[',', '•', '|', '/', '\\', '·', '>', '-', '–', '―'];

/// Essential-section vocabulary for the coverage score.
pub const COVERAGE_SECTIONS: &[(&str, &[&str])] = &[
    ("contact", &["email", "phone", "address", "linkedin"]),
    (
        "education",
        &["education", "university", "college", "degree", "academic"],
    ),
    (
        "experience",
        &["experience", "work", "employment", "job", "internship"],
    ),
    (
        "skills",
        &[
            "skills",
            "technologies",
            "tools",
            "proficiencies",
            "expertise",
        ],
    ),
];

lazy_static! {
    /// Process-wide keyword configuration.
    pub static ref KEYWORD_TABLES: KeywordTables = KeywordTables::build();
}

impl KeywordTables {
    fn build() -> Self {
        let section = |name, keywords| SectionSpec {
            name,
            keywords,
            other_sections: RESUME_KEYWORDS,
        };

        KeywordTables {
            document_types: vec![
                (DocumentType::Resume, RESUME_KEYWORDS),
                (DocumentType::Marksheet, MARKSHEET_KEYWORDS),
                (DocumentType::Certificate, CERTIFICATE_KEYWORDS),
                (DocumentType::IdCard, ID_CARD_KEYWORDS),
            ],
            education: section("education", EDUCATION_KEYWORDS),
            experience: section("experience", EXPERIENCE_KEYWORDS),
            projects: section("projects", PROJECT_KEYWORDS),
            skills: section("skills", SKILL_KEYWORDS),
            summary: section("summary", SUMMARY_KEYWORDS),
        }
    }
}

/// Case-insensitive containment of any keyword in an already-lowercased line.
pub fn contains_any(lower_line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower_line.contains(k))
}
