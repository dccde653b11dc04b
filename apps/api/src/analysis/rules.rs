//! Tunable thresholds for the ATS scorer and authorship detector.
//!
//! Defaults reproduce the reference scoring constants. A JSON file named by
//! `SCORING_RULES_PATH` may override any subset of fields.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub ats: AtsRules,
    pub detector: DetectorThresholds,
}

impl ScoringRules {
    /// Loads rules from a JSON file, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring rules from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid scoring rules JSON in {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsRules {
    pub formatting_base: i32,
    /// Substrings taken as evidence of a standard document format.
    pub format_markers: Vec<String>,
    pub missing_format_penalty: i32,

    pub keywords: Vec<String>,
    pub keyword_base: i32,
    pub keyword_step: i32,
    pub keyword_cap: i32,
    /// Keyword scores below this get the "add more keywords" feedback.
    pub keyword_good_score: i32,

    pub structure_base: i32,
    pub sections: Vec<String>,
    pub min_sections: usize,
    pub missing_sections_penalty: i32,

    pub readability_base: i32,
    pub max_avg_sentence_words: f64,
    pub long_sentence_penalty: i32,
    pub min_words: usize,
    pub brief_penalty: i32,
    pub max_words: usize,
    pub verbose_penalty: i32,

    /// Categories scoring below this produce a recommendation.
    pub recommend_below: i32,
}

impl Default for AtsRules {
    fn default() -> Self {
        Self {
            formatting_base: 85,
            format_markers: to_strings(&["pdf", "docx"]),
            missing_format_penalty: 10,
            keywords: to_strings(&[
                "experience",
                "skills",
                "project",
                "team",
                "management",
                "development",
                "analysis",
            ]),
            keyword_base: 50,
            keyword_step: 8,
            keyword_cap: 95,
            keyword_good_score: 70,
            structure_base: 90,
            sections: to_strings(&["experience", "education", "skills", "summary"]),
            min_sections: 3,
            missing_sections_penalty: 15,
            readability_base: 75,
            max_avg_sentence_words: 25.0,
            long_sentence_penalty: 15,
            min_words: 200,
            brief_penalty: 10,
            max_words: 800,
            verbose_penalty: 5,
            recommend_below: 80,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorThresholds {
    /// Score added per pattern match.
    pub pattern_weight: u32,

    pub ai_long_sentence_words: f64,
    pub ai_long_sentence_bonus: u32,
    pub ai_long_word_length: f64,
    pub ai_long_word_bonus: u32,
    pub human_short_sentence_words: f64,
    pub human_short_sentence_bonus: u32,
    pub human_short_word_length: f64,
    pub human_short_word_bonus: u32,

    /// The detector never reports more than this AI probability.
    pub max_ai_probability: f64,
    /// Strictly above → "AI-Generated".
    pub ai_generated_above: f64,
    /// Strictly above → "Mixed/Uncertain", otherwise "Human-Written".
    pub mixed_above: f64,
}

impl Default for DetectorThresholds {
    fn default() -> Self {
        Self {
            pattern_weight: 2,
            ai_long_sentence_words: 20.0,
            ai_long_sentence_bonus: 3,
            ai_long_word_length: 5.0,
            ai_long_word_bonus: 2,
            human_short_sentence_words: 15.0,
            human_short_sentence_bonus: 2,
            human_short_word_length: 4.5,
            human_short_word_bonus: 1,
            max_ai_probability: 0.95,
            ai_generated_above: 0.7,
            mixed_above: 0.3,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_path_returns_defaults() {
        let rules = ScoringRules::load(None).unwrap();
        assert_eq!(rules.ats.formatting_base, 85);
        assert_eq!(rules.ats.keywords.len(), 7);
        assert_eq!(rules.detector.max_ai_probability, 0.95);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let json = r#"{ "ats": { "keyword_cap": 90 },"detector": { "mixed_above": 0.25 } }"#;
        let rules: ScoringRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.ats.keyword_cap, 90);
        assert_eq!(rules.ats.structure_base, 90);
        assert_eq!(rules.detector.mixed_above, 0.25);
        assert_eq!(rules.detector.ai_generated_above, 0.7);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{ "ats": { "min_words": 50 } }"#).unwrap();
        let rules = ScoringRules::load(Some(&path)).unwrap();
        assert_eq!(rules.ats.min_words, 50);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = ScoringRules::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read scoring rules"));
    }
}
