use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::suggestions::CategorySuggestions;

/// Penalty per contact, experience or education suggestion.
const STRUCTURAL_PENALTY: f64 = 25.0;
/// Penalty for the (single) summary suggestion.
const SUMMARY_PENALTY: f64 = 33.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub contact: f64,
    pub summary: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            contact: 0.1,
            summary: 0.1,
            skills: 0.3,
            experience: 0.2,
            education: 0.1,
            format: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.contact + self.summary + self.skills + self.experience + self.education + self.format
    }
}

/// The six sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: f64,
    pub summary: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

impl SectionScores {
    /// Derives sub-scores from suggestion counts plus the two direct scores.
    pub fn from_suggestions(
        suggestions: &CategorySuggestions,
        keyword_score: f64,
        format_score: f64,
    ) -> Self {
        Self {
            contact: penalized(STRUCTURAL_PENALTY, suggestions.contact.len()),
            summary: penalized(SUMMARY_PENALTY, suggestions.summary.len()),
            skills: keyword_score.clamp(0.0, 100.0),
            experience: penalized(STRUCTURAL_PENALTY, suggestions.experience.len()),
            education: penalized(STRUCTURAL_PENALTY, suggestions.education.len()),
            format: format_score.clamp(0.0, 100.0),
        }
    }

    /// Weighted sum with every term rounded to an integer before summation
    /// (half-to-even).
    pub fn ats_score(&self, weights: &ScoreWeights) -> u32 {
        let terms = [
            self.contact * weights.contact,
            self.summary * weights.summary,
            self.skills * weights.skills,
            self.experience * weights.experience,
            self.education * weights.education,
            self.format * weights.format,
        ];
        let total: f64 = terms.iter().map(|t| t.round_ties_even()).sum();
        total.clamp(0.0, 100.0) as u32
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("contact".to_string(), self.contact),
            ("summary".to_string(), self.summary),
            ("skills".to_string(), self.skills),
            ("experience".to_string(), self.experience),
            ("education".to_string(), self.education),
            ("format".to_string(), self.format),
        ])
    }
}

/// `100 - penalty × count`, floored at 0 in case a category ever grows past
/// its documented maximum.
fn penalized(penalty: f64, count: usize) -> f64 {
    (100.0 - penalty * count as f64).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(
        contact: usize,
        summary: usize,
        experience: usize,
        education: usize,
    ) -> CategorySuggestions {
        let n = |k: usize| vec!["x".to_string(); k];
        CategorySuggestions {
            contact: n(contact),
            summary: n(summary),
            skills: vec![],
            experience: n(experience),
            education: n(education),
            format: vec![],
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoreWeights::default().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_scores_from_counts() {
        let scores = SectionScores::from_suggestions(&suggestions(1, 1, 0, 3), 50.0, 85.0);
        assert_eq!(scores.contact, 75.0);
        assert_eq!(scores.summary, 67.0);
        assert_eq!(scores.experience, 100.0);
        assert_eq!(scores.education, 25.0);
        assert_eq!(scores.skills, 50.0);
        assert_eq!(scores.format, 85.0);
    }

    #[test]
    fn test_sub_scores_never_negative() {
        let scores = SectionScores::from_suggestions(&suggestions(5, 4, 9, 6), 0.0, 0.0);
        for v in scores.to_map().values() {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_ats_score_rounds_each_term() {
        // contact 7.5→8, summary 6.7→7, skills 20.0→20, experience 20, education 10, format 20
        let scores = SectionScores {
            contact: 75.0,
            summary: 67.0,
            skills: 200.0 / 3.0,
            experience: 100.0,
            education: 100.0,
            format: 100.0,
        };
        assert_eq!(scores.ats_score(&ScoreWeights::default()), 85);
    }

    #[test]
    fn test_ats_score_differs_from_rounding_the_sum() {
        // 0.5-sized fractions round to even per term: 2.5→2, 2.5→2 → 4, sum-then-round gives 5
        let weights = ScoreWeights {
            contact: 0.5,
            summary: 0.5,
            skills: 0.0,
            experience: 0.0,
            education: 0.0,
            format: 0.0,
        };
        let scores = SectionScores {
            contact: 5.0,
            summary: 5.0,
            ..SectionScores::default()
        };
        assert_eq!(scores.ats_score(&weights), 4);
    }

    #[test]
    fn test_perfect_scores_total_100() {
        let scores = SectionScores::from_suggestions(&suggestions(0, 0, 0, 0), 100.0, 100.0);
        assert_eq!(scores.ats_score(&ScoreWeights::default()), 100);
    }

    #[test]
    fn test_to_map_has_six_sections() {
        let map = SectionScores::default().to_map();
        assert_eq!(map.len(), 6);
        assert!(map.contains_key("experience"));
    }
}
