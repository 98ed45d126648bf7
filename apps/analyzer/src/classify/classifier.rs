//! Document classifier — keyword density/frequency scoring per document type.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coarse label for an input document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Resume,
    Marksheet,
    Certificate,
    IdCard,
    #[default]
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::Marksheet => "marksheet",
            DocumentType::Certificate => "certificate",
            DocumentType::IdCard => "id_card",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub doc_type: DocumentType,
    /// Highest type score observed, even when the label fell back to `Unknown`.
    pub score: f64,
}

/// Classifies `text` against per-type keyword sets.
///
/// Algorithm:
/// 1. density   = matched / total keywords for the type
/// 2. frequency = matched / (word count + 1)
/// 3. type score = 0.7 × density + 0.3 × frequency
/// 4. Highest score wins (first type on ties). A winning score ≤ `threshold`
///    yields `Unknown`.
pub fn classify(
    text: &str,
    document_types: &[(DocumentType, &[&str])],
    threshold: f64,
) -> ClassificationResult {
    let lower = text.to_lowercase();
    let word_count = lower.split_whitespace().count();

    let mut best = ClassificationResult {
        doc_type: DocumentType::Unknown,
        score: f64::NEG_INFINITY,
    };

    for (doc_type, keywords) in document_types {
        let matches = keywords.iter().filter(|k| lower.contains(*k)).count() as f64;
        let density = if keywords.is_empty() {
            0.0
        } else {
            matches / keywords.len() as f64
        };
        let frequency = matches / (word_count as f64 + 1.0);
        let score = density * 0.7 + frequency * 0.3;

        debug!(doc_type = %doc_type, score, "document type score");

        if score > best.score {
            best = ClassificationResult {
                doc_type: *doc_type,
                score,
            };
        }
    }

    if !best.score.is_finite() {
        return ClassificationResult {
            doc_type: DocumentType::Unknown,
            score: 0.0,
        };
    }

    if best.score > threshold {
        best
    } else {
        ClassificationResult {
            doc_type: DocumentType::Unknown,
            score: best.score,
        }
    }
}
