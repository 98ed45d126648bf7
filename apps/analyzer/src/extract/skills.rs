//! Skills extraction — section scanning plus separator splitting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::extract::section::SectionExtractor;
use crate::keywords::{SectionSpec, SKILL_SEPARATORS};

/// How a skills entry is broken into individual skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSplitMode {
    /// Split the whole entry once per separator present and keep every piece.
    /// Entries mixing separators produce overlapping fragments.
    #[default]
    PerSeparator,
    /// Split pieces successively on every separator, yielding atomic skills.
    Recursive,
}

impl SkillSplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillSplitMode::PerSeparator => "per_separator",
            SkillSplitMode::Recursive => "recursive",
        }
    }
}

/// Extracts the skill set from `text`.
pub fn extract_skills(text: &str, spec: &SectionSpec, mode: SkillSplitMode) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();
    SectionExtractor::new(spec).scan_with(text, |entry| split_entry(&entry, mode, &mut skills));
    skills
}

/// Splits one entry into skills. Entries without any separator contribute nothing.
pub fn split_entry(entry: &str, mode: SkillSplitMode, out: &mut BTreeSet<String>) {
    if !entry.contains(SKILL_SEPARATORS) {
        return;
    }

    match mode {
        SkillSplitMode::PerSeparator => {
            for &sep in SKILL_SEPARATORS {
                if entry.contains(sep) {
                    insert_pieces(entry.split(sep), out);
                }
            }
        }
        SkillSplitMode::Recursive => {
            let mut pieces = vec![entry];
            for &sep in SKILL_SEPARATORS {
                pieces = pieces.into_iter().flat_map(|p| p.split(sep)).collect();
            }
            insert_pieces(pieces.into_iter(), out);
        }
    }
}

fn insert_pieces<'a>(pieces: impl Iterator<Item = &'a str>, out: &mut BTreeSet<String>) {
    for piece in pieces {
        let piece = piece.trim();
        if !piece.is_empty() {
            out.insert(piece.to_string());
        }
    }
}
