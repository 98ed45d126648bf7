// Document classification gate.
// Decides whether the input is a resume before any extraction runs.

pub mod classifier;

pub use classifier::{classify, ClassificationResult, DocumentType};
