//! Authorship detector. Tallies AI-leaning and human-leaning stylistic
//! patterns plus sentence/word-length signals into a capped AI probability.
//!
//! The probability never reaches 1.0; `max_ai_probability` caps it.

use serde::Serialize;

use crate::analysis::patterns::{PatternRule, PatternSide, PATTERN_TABLE};
use crate::analysis::recommendations::authorship_recommendations;
use crate::analysis::rules::DetectorThresholds;
use crate::analysis::signals::{text_stats, TextStats};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    #[serde(rename = "AI-Generated")]
    AiGenerated,
    #[serde(rename = "Mixed/Uncertain")]
    Mixed,
    #[serde(rename = "Human-Written")]
    HumanWritten,
}

impl Classification {
    /// Bands are strict: a probability exactly on a threshold falls in the lower band.
    pub fn from_probability(ai_probability: f64, thresholds: &DetectorThresholds) -> Self {
        if ai_probability > thresholds.ai_generated_above {
            Classification::AiGenerated
        } else if ai_probability > thresholds.mixed_above {
            Classification::Mixed
        } else {
            Classification::HumanWritten
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPattern {
    #[serde(rename = "type")]
    pub side: PatternSide,
    pub pattern_id: &'static str,
    pub pattern: String,
    pub count: usize, // ≥ 1
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub ai_probability: f64,
    pub human_probability: f64,
    pub confidence_score: f64,
    pub classification: Classification,
    pub patterns: Vec<DetectedPattern>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub stats: TextStats,
}

/// Raw evidence tallies before they are turned into probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvidenceScores {
    pub ai: u32,
    pub human: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Authorship detector backend. Carried in `AppState` as `Arc<dyn AuthorshipDetector>`.
pub trait AuthorshipDetector: Send + Sync {
    fn classify(&self, text: &str) -> ClassificationResult;
}

/// Pattern-table detector driven by `DetectorThresholds`.
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    pub thresholds: DetectorThresholds,
}

impl PatternDetector {
    pub fn new(thresholds: DetectorThresholds) -> Self {
        Self { thresholds }
    }
}

impl AuthorshipDetector for PatternDetector {
    fn classify(&self, text: &str) -> ClassificationResult {
        classify_text(text, &PATTERN_TABLE, &self.thresholds)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn classify_text(
    text: &str,
    table: &[PatternRule],
    thresholds: &DetectorThresholds,
) -> ClassificationResult {
    let lower = text.to_lowercase();
    let stats = text_stats(&lower);
    let patterns = detect_patterns(&lower, table);

    let mut scores = pattern_scores(&patterns, thresholds.pattern_weight);
    apply_statistics(&mut scores, &stats, thresholds);

    let ai_probability = ai_probability(scores, thresholds.max_ai_probability);
    let classification = Classification::from_probability(ai_probability, thresholds);

    ClassificationResult {
        ai_probability,
        human_probability: 1.0 - ai_probability,
        confidence_score: (ai_probability - 0.5).abs() * 2.0,
        classification,
        summary: summarize(patterns.len(), &stats),
        patterns,
        recommendations: authorship_recommendations(classification),
        stats,
    }
}

/// Non-zero pattern hits, in table order.
pub fn detect_patterns(lower_text: &str, table: &[PatternRule]) -> Vec<DetectedPattern> {
    table
        .iter()
        .filter_map(|rule| {
            let count = rule.count(lower_text);
            (count > 0).then(|| DetectedPattern {
                side: rule.side,
                pattern_id: rule.id,
                pattern: rule.source(),
                count,
                description: rule.description,
            })
        })
        .collect()
}

pub fn pattern_scores(patterns: &[DetectedPattern], weight: u32) -> EvidenceScores {
    patterns
        .iter()
        .fold(EvidenceScores::default(), |mut scores, p| {
            let points = u32::try_from(p.count)
                .unwrap_or(u32::MAX)
                .saturating_mul(weight);
            match p.side {
                PatternSide::Ai => scores.ai = scores.ai.saturating_add(points),
                PatternSide::Human => scores.human = scores.human.saturating_add(points),
            }
            scores
        })
}

/// Sentence- and word-length adjustments. The AI and human bands do not
/// overlap, but each side is checked independently. Tallies saturate, since
/// weights and bonuses may come from a rules file.
pub fn apply_statistics(
    scores: &mut EvidenceScores,
    stats: &TextStats,
    thresholds: &DetectorThresholds,
) {
    if stats.avg_words_per_sentence > thresholds.ai_long_sentence_words {
        scores.ai = scores.ai.saturating_add(thresholds.ai_long_sentence_bonus);
    }
    if stats.avg_word_length > thresholds.ai_long_word_length {
        scores.ai = scores.ai.saturating_add(thresholds.ai_long_word_bonus);
    }
    if stats.avg_words_per_sentence < thresholds.human_short_sentence_words {
        scores.human = scores.human.saturating_add(thresholds.human_short_sentence_bonus);
    }
    if stats.avg_word_length < thresholds.human_short_word_length {
        scores.human = scores.human.saturating_add(thresholds.human_short_word_bonus);
    }
}

/// `ai / (ai + human)`, with the total floored to 1 and the result capped.
pub fn ai_probability(scores: EvidenceScores, cap: f64) -> f64 {
    let total = scores.ai.saturating_add(scores.human).max(1);
    (scores.ai as f64 / total as f64).min(cap)
}

fn summarize(pattern_count: usize, stats: &TextStats) -> String {
    format!(
        "Document analyzed with {pattern_count} patterns detected. Text contains {} words across {} sentences with average sentence length of {:.1} words.",
        stats.word_count, stats.sentence_count, stats.avg_words_per_sentence
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // 16 distinct words, one unterminated sentence, average length 4.75
    const NEUTRAL: &str = "green table river stone light bread chair plant cloud music water north door lamp fish sand";

    // Same shape with one formal transition, average length 4.8125
    const ONE_TRANSITION: &str = "furthermore green table river stone light bread door lamp fish sand road gold milk rain snow";

    fn classify(text: &str) -> ClassificationResult {
        PatternDetector::default().classify(text)
    }

    #[test]
    fn test_neutral_text_is_human_with_full_confidence() {
        let r = classify(NEUTRAL);
        assert_eq!(r.stats.word_count, 16);
        assert_eq!(r.stats.avg_words_per_sentence, 16.0);
        assert!(r.patterns.is_empty());
        assert_eq!(r.ai_probability, 0.0);
        assert_eq!(r.human_probability, 1.0);
        assert_eq!(r.confidence_score, 1.0);
        assert_eq!(r.classification, Classification::HumanWritten);
    }

    #[test]
    fn test_single_transition_is_capped_ai() {
        let r = classify(ONE_TRANSITION);
        assert_eq!(r.patterns.len(), 1);
        assert_eq!(r.patterns[0].pattern_id, "formal_transitions");
        assert_eq!(r.patterns[0].count, 1);
        assert_eq!(r.ai_probability, 0.95);
        assert!((r.human_probability - 0.05).abs() < 1e-12);
        assert!((r.confidence_score - 0.9).abs() < 1e-12);
        assert_eq!(r.classification, Classification::AiGenerated);
    }

    #[test]
    fn test_empty_text_does_not_panic() {
        let r = classify("");
        assert_eq!(r.stats, TextStats::default());
        // avg lengths of 0 count as short sentences and short words
        assert_eq!(r.ai_probability, 0.0);
        assert_eq!(r.classification, Classification::HumanWritten);
        assert!(r.summary.contains("0 words across 0 sentences"));
    }

    #[test]
    fn test_human_patterns_reported_after_ai_patterns() {
        let text = "I think this is really good. Furthermore, it works!!";
        let r = classify(text);
        let ids: Vec<&str> = r.patterns.iter().map(|p| p.pattern_id).collect();
        assert_eq!(
            ids,
            vec![
                "formal_transitions",
                "opinion_markers",
                "informal_intensifiers",
                "emotional_punctuation"
            ]
        );
        assert_eq!(r.patterns[0].side, PatternSide::Ai);
        assert_eq!(r.patterns[1].description, "Personal opinion expressions");
    }

    #[test]
    fn test_pattern_scores_weighting() {
        let lower = "moreover, the plan was set. moreover i think so";
        let patterns = detect_patterns(lower, &PATTERN_TABLE);
        let scores = pattern_scores(&patterns, 2);
        assert_eq!(scores, EvidenceScores { ai: 4, human: 2 });
    }

    #[test]
    fn test_large_weights_saturate() {
        let lower = "moreover, furthermore. i think so!!";
        let patterns = detect_patterns(lower, &PATTERN_TABLE);
        let scores = pattern_scores(&patterns, u32::MAX);
        assert_eq!(scores.ai, u32::MAX);
        assert_eq!(scores.human, u32::MAX);

        let thresholds = DetectorThresholds {
            pattern_weight: u32::MAX,
            human_short_sentence_bonus: u32::MAX,
            ..DetectorThresholds::default()
        };
        let r = classify_text("Moreover, furthermore it is fine.", &PATTERN_TABLE, &thresholds);
        assert!((0.0..=thresholds.max_ai_probability).contains(&r.ai_probability));
    }

    #[test]
    fn test_repetition_across_punctuation_is_not_reported() {
        let r = classify("It's it. Furthermore, fine.");
        let ids: Vec<&str> = r.patterns.iter().map(|p| p.pattern_id).collect();
        assert_eq!(ids, vec!["formal_transitions"]);
    }

    #[test]
    fn test_statistics_adjustments() {
        let t = DetectorThresholds::default();
        let mut scores = EvidenceScores::default();
        let long = TextStats {
            word_count: 50,
            sentence_count: 2,
            avg_words_per_sentence: 25.0,
            avg_word_length: 6.0,
        };
        apply_statistics(&mut scores, &long, &t);
        assert_eq!(scores, EvidenceScores { ai: 5, human: 0 });

        let mut scores = EvidenceScores::default();
        let short = TextStats {
            word_count: 10,
            sentence_count: 2,
            avg_words_per_sentence: 5.0,
            avg_word_length: 3.0,
        };
        apply_statistics(&mut scores, &short, &t);
        assert_eq!(scores, EvidenceScores { ai: 0, human: 3 });
    }

    #[test]
    fn test_statistics_boundaries_are_strict() {
        let t = DetectorThresholds::default();
        let mut scores = EvidenceScores::default();
        let edge = TextStats {
            word_count: 20,
            sentence_count: 1,
            avg_words_per_sentence: 20.0,
            avg_word_length: 5.0,
        };
        apply_statistics(&mut scores, &edge, &t);
        assert_eq!(scores, EvidenceScores::default());
    }

    #[test]
    fn test_probability_floor_and_cap() {
        assert_eq!(ai_probability(EvidenceScores { ai: 0, human: 0 }, 0.95), 0.0);
        assert_eq!(ai_probability(EvidenceScores { ai: 10, human: 0 }, 0.95), 0.95);
        assert_eq!(ai_probability(EvidenceScores { ai: 1, human: 3 }, 0.95), 0.25);
    }

    #[test]
    fn test_classification_thresholds_are_strict() {
        let t = DetectorThresholds::default();
        assert_eq!(Classification::from_probability(0.7, &t), Classification::Mixed);
        assert_eq!(Classification::from_probability(0.71, &t), Classification::AiGenerated);
        assert_eq!(Classification::from_probability(0.3, &t), Classification::HumanWritten);
        assert_eq!(Classification::from_probability(0.31, &t), Classification::Mixed);
    }

    #[test]
    fn test_mixed_band_recommendation() {
        // ai 2 (one transition); human 2 + 1 (short sentences, short words) → 0.4
        let r = classify("Moreover it is ok.");
        assert!((r.ai_probability - 0.4).abs() < 1e-12);
        assert_eq!(r.classification, Classification::Mixed);
        assert_eq!(r.recommendations.len(), 1);
        assert!(r.recommendations[0].contains("mixed characteristics"));
    }

    #[test]
    fn test_probabilities_bounded_and_complementary() {
        let samples = [
            "",
            NEUTRAL,
            ONE_TRANSITION,
            "Furthermore, moreover, additionally, consequently, therefore, nonetheless.",
            "stuff things guy folks!!! really really very very",
        ];
        for text in samples {
            let r = classify(text);
            assert!((0.0..=0.95).contains(&r.ai_probability), "{text}");
            assert!((r.ai_probability + r.human_probability - 1.0).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&r.confidence_score));
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Overall, I believe various teams utilize multiple tools... really!";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_serializes_wire_shape() {
        let json = serde_json::to_value(classify(ONE_TRANSITION)).unwrap();
        assert_eq!(json["classification"], "AI-Generated");
        assert_eq!(json["patterns"][0]["type"], "ai_pattern");
        assert_eq!(json["patterns"][0]["patternId"], "formal_transitions");
        assert!(json.get("aiProbability").is_some());
        assert!(json.get("confidenceScore").is_some());
    }
}
