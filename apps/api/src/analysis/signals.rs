//! Text signal extractors: word/sentence statistics and term/pattern counters.
//!
//! No normalisation is assumed on input. Counters that match vocabulary
//! lower-case the text themselves; the statistics are case-independent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Basic length statistics of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_word_length: f64,
}

/// Computes word and sentence statistics.
///
/// Sentences are the segments produced by splitting on runs of `.`, `!` or `?`,
/// trailing empty segment included, so "One. Two." counts three segments.
/// Whitespace-only text yields all zeros.
pub fn text_stats(text: &str) -> TextStats {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return TextStats::default();
    }

    let sentence_count = SENTENCE_BREAK.split(text).count();
    let char_count = text.chars().filter(|c| !c.is_whitespace()).count();

    TextStats {
        word_count,
        sentence_count,
        avg_words_per_sentence: ratio(word_count, sentence_count),
        avg_word_length: ratio(char_count, word_count),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Counts non-overlapping matches of `pattern` in `text`.
pub fn count_matches(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

/// Counts words that reappear within the next `window` words.
///
/// Only words joined purely by whitespace are compared, so a repeat across
/// punctuation ("done, done", "end. end", "it's it") does not count. Each hit
/// consumes the text up to and including the repeat, so "go go go" counts once
/// for the first pair and the third word starts over.
pub fn count_repeated_words(text: &str, window: usize) -> usize {
    whitespace_runs(text)
        .iter()
        .map(|run| count_repeats_in_run(run, window))
        .sum()
}

/// Splits the words of `text` into runs separated only by whitespace.
fn whitespace_runs(text: &str) -> Vec<Vec<&str>> {
    let mut runs: Vec<Vec<&str>> = Vec::new();
    let mut prev_end: Option<usize> = None;

    for m in WORD.find_iter(text) {
        let joined = prev_end.is_some_and(|end| {
            let gap = &text[end..m.start()];
            !gap.is_empty() && gap.chars().all(char::is_whitespace)
        });
        match runs.last_mut() {
            Some(run) if joined => run.push(m.as_str()),
            _ => runs.push(vec![m.as_str()]),
        }
        prev_end = Some(m.end());
    }

    runs
}

fn count_repeats_in_run(words: &[&str], window: usize) -> usize {
    let mut count = 0;
    let mut i = 0;

    while i < words.len() {
        let last = (i + window).min(words.len() - 1);
        match (i + 1..=last).find(|&j| words[j] == words[i]) {
            Some(j) => {
                count += 1;
                i = j + 1;
            }
            None => i += 1,
        }
    }

    count
}

/// Returns the terms that occur as substrings of `text`, case-insensitively,
/// preserving the order of `terms`.
pub fn terms_present<'a>(text: &str, terms: &'a [String]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    terms
        .iter()
        .map(String::as_str)
        .filter(|term| !term.is_empty() && lower.contains(&term.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(text_stats(""), TextStats::default());
        assert_eq!(text_stats("   \n\t "), TextStats::default());
    }

    #[test]
    fn test_word_count_ignores_whitespace_runs() {
        let stats = text_stats("  one   two\n\nthree\tfour ");
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_sentence_count_includes_trailing_segment() {
        let stats = text_stats("One two. Three four!");
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.word_count, 4);
        assert!((stats.avg_words_per_sentence - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_count_without_terminal_punctuation() {
        let stats = text_stats("no punctuation at all");
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.avg_words_per_sentence, 4.0);
    }

    #[test]
    fn test_punctuation_runs_split_once() {
        assert_eq!(text_stats("Wait?!... What").sentence_count, 2);
    }

    #[test]
    fn test_avg_word_length_excludes_whitespace() {
        let stats = text_stats("ab  abcd");
        assert_eq!(stats.avg_word_length, 3.0);
    }

    #[test]
    fn test_avg_word_length_counts_chars_not_bytes() {
        let stats = text_stats("café naïve");
        assert_eq!(stats.avg_word_length, 4.5);
    }

    #[test]
    fn test_count_matches_non_overlapping() {
        let re = Regex::new(r"[.!?]{2,}").unwrap();
        assert_eq!(count_matches(&re, "what?? no!!! ok."), 2);
    }

    #[test]
    fn test_repeated_words_within_window() {
        assert_eq!(count_repeated_words("the cat saw the dog", 3), 1);
        assert_eq!(count_repeated_words("very very good", 3), 1);
    }

    #[test]
    fn test_repeated_words_outside_window_ignored() {
        assert_eq!(count_repeated_words("red one two three red", 3), 0);
    }

    #[test]
    fn test_repeated_words_consumes_match() {
        assert_eq!(count_repeated_words("go go go", 3), 1);
        assert_eq!(count_repeated_words("go go go go", 3), 2);
    }

    #[test]
    fn test_repeated_words_do_not_cross_punctuation() {
        assert_eq!(count_repeated_words("end. end", 3), 0);
        assert_eq!(count_repeated_words("it's it", 3), 0);
        assert_eq!(count_repeated_words("done, done", 3), 0);
        assert_eq!(count_repeated_words("so done, done done", 3), 1);
    }

    #[test]
    fn test_repeated_words_empty() {
        assert_eq!(count_repeated_words("", 3), 0);
        assert_eq!(count_repeated_words("single", 3), 0);
    }

    #[test]
    fn test_terms_present_is_case_insensitive_and_ordered() {
        let terms = vec!["skills".to_string(), "Experience".to_string(), "team".to_string()];
        let found = terms_present("EXPERIENCE with Skills", &terms);
        assert_eq!(found, vec!["skills", "Experience"]);
    }
}
