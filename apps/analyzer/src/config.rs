use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::errors::AnalyzerError;
use crate::extract::SkillSplitMode;
use crate::scoring::ScoreWeights;

pub const DEFAULT_CLASSIFICATION_THRESHOLD: f64 = 0.15;

/// Analyzer tunables. Keyword vocabularies live in `keywords` and are not
/// configurable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// A winning document-type score at or below this is reported as unknown.
    pub classification_threshold: f64,
    pub skill_split_mode: SkillSplitMode,
    pub weights: ScoreWeights,
    pub rust_log: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            classification_threshold: DEFAULT_CLASSIFICATION_THRESHOLD,
            skill_split_mode: SkillSplitMode::default(),
            weights: ScoreWeights::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Loads overrides from the environment (and `.env` if present).
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AnalyzerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ATS_CLASSIFICATION_THRESHOLD") {
            config.classification_threshold = raw.trim().parse::<f64>().with_context(|| {
                format!("ATS_CLASSIFICATION_THRESHOLD must be a number, got '{raw}'")
            })?;
        }

        if let Some(raw) = lookup("ATS_SKILL_SPLIT_MODE") {
            config.skill_split_mode = parse_split_mode(&raw)?;
        }

        if let Some(level) = lookup("RUST_LOG") {
            config.rust_log = level;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !(0.0..=1.0).contains(&self.classification_threshold) {
            return Err(AnalyzerError::InvalidThreshold(
                self.classification_threshold,
            ));
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(AnalyzerError::InvalidWeights(total));
        }
        Ok(())
    }
}

fn parse_split_mode(raw: &str) -> Result<SkillSplitMode, AnalyzerError> {
    match raw.trim().to_lowercase().as_str() {
        "per_separator" => Ok(SkillSplitMode::PerSeparator),
        "recursive" => Ok(SkillSplitMode::Recursive),
        other => Err(AnalyzerError::UnknownSplitMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classification_threshold, 0.15);
        assert_eq!(config.skill_split_mode, SkillSplitMode::PerSeparator);
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let config = AnalyzerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AnalyzerConfig::from_lookup(lookup(&[
            ("ATS_CLASSIFICATION_THRESHOLD", "0.2"),
            ("ATS_SKILL_SPLIT_MODE", "Recursive"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.classification_threshold, 0.2);
        assert_eq!(config.skill_split_mode, SkillSplitMode::Recursive);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_non_numeric_threshold_is_config_error() {
        let err = AnalyzerConfig::from_lookup(lookup(&[("ATS_CLASSIFICATION_THRESHOLD", "high")]))
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
        assert!(err.to_string().contains("ATS_CLASSIFICATION_THRESHOLD"));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = AnalyzerConfig::from_lookup(lookup(&[("ATS_CLASSIFICATION_THRESHOLD", "1.5")]))
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidThreshold(t) if t == 1.5));
    }

    #[test]
    fn test_unknown_split_mode_rejected() {
        let err =
            AnalyzerConfig::from_lookup(lookup(&[("ATS_SKILL_SPLIT_MODE", "zigzag")])).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownSplitMode(m) if m == "zigzag"));
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let config = AnalyzerConfig {
            weights: ScoreWeights {
                skills: 0.5,
                ..ScoreWeights::default()
            },
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::InvalidWeights(_))
        ));
    }
}
