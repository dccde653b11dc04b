//! ATS compatibility scoring: four independent category scorers and an
//! unweighted aggregate.
//!
//! Pipeline: text → `AtsSignals` → per-category `CategoryResult` → `ScoreReport`.
//! Every category score is clamped to 0–100.

use serde::Serialize;

use crate::analysis::recommendations::ats_recommendations;
use crate::analysis::rules::AtsRules;
use crate::analysis::signals::{terms_present, text_stats, TextStats};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub score: u32, // 0 – 100
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScores {
    pub formatting: CategoryResult,
    pub keywords: CategoryResult,
    pub structure: CategoryResult,
    pub readability: CategoryResult,
}

impl CategoryScores {
    /// Categories in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CategoryResult)> {
        [
            ("formatting", &self.formatting),
            ("keywords", &self.keywords),
            ("structure", &self.structure),
            ("readability", &self.readability),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreRating {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreRating::Excellent,
            s if s >= 60 => ScoreRating::Good,
            _ => ScoreRating::NeedsImprovement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u32, // mean of the four categories, rounded
    pub rating: ScoreRating,
    pub categories: CategoryScores,
    pub recommendations: Vec<String>,
    pub stats: TextStats,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// ATS scorer backend. Carried in `AppState` as `Arc<dyn AtsScorer>`.
pub trait AtsScorer: Send + Sync {
    fn score(&self, text: &str) -> ScoreReport;
}

/// Keyword/section/statistics scorer driven by `AtsRules`.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAtsScorer {
    pub rules: AtsRules,
}

impl RuleBasedAtsScorer {
    pub fn new(rules: AtsRules) -> Self {
        Self { rules }
    }
}

impl AtsScorer for RuleBasedAtsScorer {
    fn score(&self, text: &str) -> ScoreReport {
        score_resume(text, &self.rules)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Signals
// ────────────────────────────────────────────────────────────────────────────

/// Everything the category scorers look at, extracted in one pass.
#[derive(Debug, Clone)]
pub struct AtsSignals<'r> {
    pub stats: TextStats,
    pub format_markers: Vec<&'r str>,
    pub keywords: Vec<&'r str>,
    pub sections: Vec<&'r str>,
}

pub fn extract_ats_signals<'r>(text: &str, rules: &'r AtsRules) -> AtsSignals<'r> {
    AtsSignals {
        stats: text_stats(text),
        format_markers: terms_present(text, &rules.format_markers),
        keywords: terms_present(text, &rules.keywords),
        sections: terms_present(text, &rules.sections),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category scorers
// ────────────────────────────────────────────────────────────────────────────

/// Format markers are looked for in the decoded text only; the real file type
/// is not recoverable from it.
pub fn score_formatting(signals: &AtsSignals, rules: &AtsRules) -> CategoryResult {
    let mut score = rules.formatting_base;
    let mut feedback = Vec::new();

    if signals.format_markers.is_empty() {
        score -= rules.missing_format_penalty;
        feedback.push(
            "Use a standard file format such as PDF or DOCX for best ATS compatibility".to_string(),
        );
    } else {
        feedback.push(format!(
            "Standard document format referenced ({})",
            signals.format_markers.join(", ")
        ));
    }

    CategoryResult {
        score: clamp_score(score),
        feedback,
    }
}

pub fn score_keywords(signals: &AtsSignals, rules: &AtsRules) -> CategoryResult {
    let matched = signals.keywords.len() as i32;
    let score = (rules.keyword_base + rules.keyword_step * matched).min(rules.keyword_cap);

    let mut feedback = vec![format!(
        "Found {matched} of {} key resume keywords",
        rules.keywords.len()
    )];
    if score < rules.keyword_good_score {
        feedback.push("Add more industry-relevant keywords to improve ATS matching".to_string());
    } else {
        feedback.push("Good keyword coverage for ATS systems".to_string());
    }

    CategoryResult {
        score: clamp_score(score),
        feedback,
    }
}

pub fn score_structure(signals: &AtsSignals, rules: &AtsRules) -> CategoryResult {
    let mut score = rules.structure_base;
    let found = signals.sections.len();
    let mut feedback = vec![format!(
        "Found {found} of {} standard sections",
        rules.sections.len()
    )];

    if found < rules.min_sections {
        score -= rules.missing_sections_penalty;
        let missing: Vec<&str> = rules
            .sections
            .iter()
            .map(String::as_str)
            .filter(|s| !signals.sections.contains(s))
            .collect();
        feedback.push(format!(
            "Missing standard sections: {}",
            missing.join(", ")
        ));
    } else {
        feedback.push("Clear section structure detected".to_string());
    }

    CategoryResult {
        score: clamp_score(score),
        feedback,
    }
}

/// Both length penalties may apply together; they are cumulative.
pub fn score_readability(signals: &AtsSignals, rules: &AtsRules) -> CategoryResult {
    let stats = &signals.stats;
    let mut score = rules.readability_base;
    let mut feedback = Vec::new();

    if stats.avg_words_per_sentence > rules.max_avg_sentence_words {
        score -= rules.long_sentence_penalty;
        feedback.push(format!(
            "Sentences are too long (average {:.1} words); keep them under {}",
            stats.avg_words_per_sentence, rules.max_avg_sentence_words
        ));
    } else {
        feedback.push(format!(
            "Good sentence length (average {:.1} words)",
            stats.avg_words_per_sentence
        ));
    }

    if stats.word_count < rules.min_words {
        score -= rules.brief_penalty;
        feedback.push(format!(
            "Resume is too brief ({} words); aim for at least {}",
            stats.word_count, rules.min_words
        ));
    } else if stats.word_count > rules.max_words {
        score -= rules.verbose_penalty;
        feedback.push(format!(
            "Resume may be too long ({} words); aim for under {}",
            stats.word_count, rules.max_words
        ));
    } else {
        feedback.push(format!("Appropriate length ({} words)", stats.word_count));
    }

    CategoryResult {
        score: clamp_score(score),
        feedback,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(text: &str, rules: &AtsRules) -> ScoreReport {
    let signals = extract_ats_signals(text, rules);

    let categories = CategoryScores {
        formatting: score_formatting(&signals, rules),
        keywords: score_keywords(&signals, rules),
        structure: score_structure(&signals, rules),
        readability: score_readability(&signals, rules),
    };

    let overall_score = overall_score(&categories);
    let recommendations = ats_recommendations(&categories, rules);

    ScoreReport {
        overall_score,
        rating: ScoreRating::from_score(overall_score),
        categories,
        recommendations,
        stats: signals.stats,
    }
}

/// Unweighted mean of the category scores, rounded half away from zero.
pub fn overall_score(categories: &CategoryScores) -> u32 {
    let (sum, count) = categories
        .iter()
        .fold((0u32, 0u32), |(sum, n), (_, c)| (sum + c.score, n + 1));
    (sum as f64 / count as f64).round() as u32
}

fn clamp_score(raw: i32) -> u32 {
    raw.clamp(0, 100) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
