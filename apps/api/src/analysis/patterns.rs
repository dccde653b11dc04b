//! Stylistic pattern table used by the authorship detector.
//!
//! One ordered table holds each pattern together with its side and description,
//! so descriptions cannot drift from their patterns. Table order is the order in
//! which detected patterns are reported.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::signals::{count_matches, count_repeated_words};

/// Which authorship a pattern is weak evidence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternSide {
    #[serde(rename = "ai_pattern")]
    Ai,
    #[serde(rename = "human_pattern")]
    Human,
}

/// How a pattern is matched against lower-cased text.
#[derive(Debug)]
pub enum Matcher {
    Regex(Regex),
    /// A word reappearing within the next `window` words.
    RepeatedWord { window: usize },
}

#[derive(Debug)]
pub struct PatternRule {
    pub id: &'static str,
    pub side: PatternSide,
    pub description: &'static str,
    pub matcher: Matcher,
}

impl PatternRule {
    /// Number of matches in `lower_text`. Callers lower-case the input once.
    pub fn count(&self, lower_text: &str) -> usize {
        match &self.matcher {
            Matcher::Regex(re) => count_matches(re, lower_text),
            Matcher::RepeatedWord { window } => count_repeated_words(lower_text, *window),
        }
    }

    /// Human-readable form of the matcher, reported alongside detections.
    pub fn source(&self) -> String {
        match &self.matcher {
            Matcher::Regex(re) => re.as_str().to_string(),
            Matcher::RepeatedWord { window } => format!("word repeated within {window} words"),
        }
    }
}

fn rule(id: &'static str, side: PatternSide, description: &'static str, re: &str) -> PatternRule {
    PatternRule {
        id,
        side,
        description,
        matcher: Matcher::Regex(Regex::new(&format!("(?i){re}")).expect("valid pattern regex")),
    }
}

pub static PATTERN_TABLE: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    use PatternSide::{Ai, Human};
    vec![
        rule(
            "formal_transitions",
            Ai,
            "Formal transitional phrases",
            r"\b(furthermore|moreover|additionally|consequently|therefore|nonetheless)\b",
        ),
        rule(
            "hedging_language",
            Ai,
            "Academic hedging language",
            r"\b(it is important to note|it should be noted|it is worth mentioning)\b",
        ),
        rule(
            "summary_markers",
            Ai,
            "Summary and conclusion markers",
            r"\b(in conclusion|to summarize|in summary|overall)\b",
        ),
        rule(
            "quantifying_adjectives",
            Ai,
            "Quantifying adjectives",
            r"\b(various|numerous|several|multiple)\b",
        ),
        rule(
            "formal_vocabulary",
            Ai,
            "Formal vocabulary choices",
            r"\b(utilize|implement|facilitate|optimize)\b",
        ),
        rule(
            "opinion_markers",
            Human,
            "Personal opinion expressions",
            r"\b(i think|i believe|in my opinion|personally)\b",
        ),
        rule(
            "informal_intensifiers",
            Human,
            "Informal intensifiers",
            r"\b(actually|really|pretty|quite|very)\b",
        ),
        rule(
            "casual_vocabulary",
            Human,
            "Casual vocabulary",
            r"\b(stuff|things|guy|folks)\b",
        ),
        rule(
            "emotional_punctuation",
            Human,
            "Emotional punctuation",
            r"[.!?]{2,}",
        ),
        PatternRule {
            id: "repetitive_phrasing",
            side: Human,
            description: "Repetitive phrasing",
            matcher: Matcher::RepeatedWord { window: 3 },
        },
    ]
});
