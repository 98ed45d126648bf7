pub mod analysis;
pub mod requirements;

pub use analysis::{AnalysisResult, ExtractedSections};
pub use requirements::JobRequirements;
