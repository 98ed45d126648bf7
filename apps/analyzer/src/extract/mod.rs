// Section and contact extraction over plain resume text.
// Every extractor is a pure function of the text and the immutable keyword tables.

pub mod personal_info;
pub mod section;
pub mod skills;
pub mod summary;

pub use personal_info::{extract_personal_info, PersonalInfo};
pub use section::SectionExtractor;
pub use skills::{extract_skills, SkillSplitMode};
pub use summary::extract_summary;
