//! Generic section extractor — a two-state line scanner shared by every
//! section kind.
//!
//! The scanner walks trimmed lines:
//! - a line containing one of the section's keywords opens (or re-opens) the
//!   section; unless the line *is* a bare keyword it also joins the pending entry
//! - inside the section, non-blank lines accumulate and a blank line closes the
//!   current entry
//! - a non-blank line carrying another section's vocabulary ends the section and
//!   is not consumed
//!
//! Post-processing (skills splitting, summary joining) is layered on top via
//! [`SectionExtractor::scan_with`].

use tracing::debug;

use crate::keywords::{contains_any, SectionSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InSection,
}

/// Scanner bound to one immutable [`SectionSpec`].
#[derive(Debug, Clone, Copy)]
pub struct SectionExtractor<'a> {
    spec: &'a SectionSpec,
}

impl<'a> SectionExtractor<'a> {
    pub fn new(spec: &'a SectionSpec) -> Self {
        Self { spec }
    }

    /// Returns the section's entries in document order, empty entries dropped.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut entries = Vec::new();
        self.scan_with(text, |entry| entries.push(entry));
        entries
    }

    /// Runs the scanner and hands every flushed, non-empty entry to `on_entry`.
    pub fn scan_with<F>(&self, text: &str, mut on_entry: F)
    where
        F: FnMut(String),
    {
        let mut state = ScanState::Outside;
        let mut buffer: Vec<&str> = Vec::new();
        let mut flushed = 0usize;

        let mut flush = |buffer: &mut Vec<&str>| {
            if buffer.is_empty() {
                return;
            }
            let entry = buffer.join(" ");
            buffer.clear();
            if !entry.trim().is_empty() {
                flushed += 1;
                on_entry(entry);
            }
        };

        for raw in text.split('\n') {
            let line = raw.trim();
            let lower = line.to_lowercase();

            if contains_any(&lower, self.spec.keywords) {
                if !self.is_bare_header(&lower) {
                    buffer.push(line);
                }
                state = ScanState::InSection;
                continue;
            }

            if state == ScanState::InSection {
                if !line.is_empty() && contains_any(&lower, self.spec.other_sections) {
                    state = ScanState::Outside;
                    flush(&mut buffer);
                    continue;
                }

                if !line.is_empty() {
                    buffer.push(line);
                } else {
                    flush(&mut buffer);
                }
            }
        }

        flush(&mut buffer);

        debug!(
            section = self.spec.name,
            entries = flushed,
            "section scanned"
        );
    }

    fn is_bare_header(&self, lower_line: &str) -> bool {
        self.spec.keywords.iter().any(|k| *k == lower_line)
    }
}
