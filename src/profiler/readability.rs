// * Content Readability Analyzer: word/sentence/paragraph statistics,
// * a Flesch reading-ease score from a heuristic syllable estimate, and
// * stop-word-filtered keyword density.

use crate::config::constants::{
    KEYWORD_LIMIT, KEYWORD_MIN_COUNT, LONG_SENTENCE_WORDS, MIN_SENTENCE_CHARS,
    SHORT_SENTENCE_WORDS, SYLLABLE_SAMPLE_CAP,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static RE_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[\s>]").unwrap());

// * Words ignored by the keyword tally; three-letter-and-under words are
// * dropped by the length filter before this list is consulted.
const STOP_WORDS: &[&str] = &[
    "that", "with", "have", "this", "will", "your", "from", "they", "know", "want", "been",
    "good", "much", "some", "time", "very", "when", "come", "here", "just", "like", "long",
    "make", "many", "more", "only", "over", "such", "take", "than", "them", "well", "were",
    "what", "where", "which", "while", "would", "there", "their", "about", "after", "again",
    "also", "because", "before", "being", "between", "both", "could", "does", "each", "other",
    "should", "these", "those", "through", "under", "until", "into", "most", "must", "never",
    "once", "same", "then", "even", "still", "every", "please",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReadabilityBand {
    Easy,
    Standard,
    #[default]
    Difficult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    /// Percentage of total words, two decimals
    pub density: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub word_count: usize,
    /// Floored at 1 so ratio fields never divide by zero
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_sentences_per_paragraph: f64,
    /// Flesch reading-ease, clamped to [0, 100]
    pub flesch_score: f64,
    pub readability_band: ReadabilityBand,
    pub grade_label: String,
    pub top_keywords: Vec<KeywordDensity>,
    pub long_sentence_count: usize,
    pub short_sentence_count: usize,
}

pub struct ContentAnalyzer;

impl ContentAnalyzer {
    /// `text` is the normalized content view; `html` is only consulted for
    /// the paragraph count, which comes from the original markup.
    pub fn analyze(text: &str, html: &str) -> ContentMetrics {
        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| s.len() >= MIN_SENTENCE_CHARS)
            .collect();
        let sentence_count = sentences.len().max(1);

        let paragraph_count = RE_PARAGRAPH.find_iter(html).count();

        let sentence_word_counts: Vec<usize> = sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .collect();
        let long_sentence_count = sentence_word_counts
            .iter()
            .filter(|&&c| c > LONG_SENTENCE_WORDS)
            .count();
        let short_sentence_count = sentence_word_counts
            .iter()
            .filter(|&&c| c < SHORT_SENTENCE_WORDS)
            .count();

        let flesch_score = flesch_reading_ease(&words, sentence_count);
        let (readability_band, grade_label) = band_for_score(flesch_score);

        ContentMetrics {
            word_count,
            sentence_count,
            paragraph_count,
            avg_words_per_sentence: round2(word_count as f64 / sentence_count as f64),
            avg_sentences_per_paragraph: if paragraph_count == 0 {
                0.0
            } else {
                round2(sentence_count as f64 / paragraph_count as f64)
            },
            flesch_score,
            readability_band,
            grade_label: grade_label.to_string(),
            top_keywords: keyword_density(text, word_count),
            long_sentence_count,
            short_sentence_count,
        }
    }
}

// * Flesch: 206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words).
// * Syllables are sampled from the first 500 words to bound cost.
fn flesch_reading_ease(words: &[&str], sentence_count: usize) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let sample = &words[..words.len().min(SYLLABLE_SAMPLE_CAP)];
    let syllables: usize = sample.iter().map(|w| estimate_syllables(w)).sum();
    let syllables_per_word = syllables as f64 / sample.len() as f64;
    let words_per_sentence = words.len() as f64 / sentence_count as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

// * Approximate by design: short words count one; a trailing e/ed/es after a
// * consonant and a leading y are stripped before counting vowel-group runs.
fn estimate_syllables(word: &str) -> usize {
    let clean: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();

    if clean.len() <= 3 {
        return 1;
    }

    let mut end = clean.len();
    let is_consonant = |c: char| c.is_alphabetic() && !VOWELS.contains(&c);

    if end >= 3 && (ends_with(&clean, "ed") || ends_with(&clean, "es")) {
        if is_consonant(clean[end - 3]) {
            end -= 2;
        }
    } else if end >= 2 && clean[end - 1] == 'e' && is_consonant(clean[end - 2]) {
        end -= 1;
    }

    let mut start = 0;
    if clean[0] == 'y' {
        start = 1;
    }

    let mut groups = 0;
    let mut in_group = false;
    for &c in &clean[start..end] {
        if VOWELS.contains(&c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    groups.max(1)
}

fn ends_with(chars: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    chars.len() >= suffix.len() && chars[chars.len() - suffix.len()..] == suffix[..]
}

fn band_for_score(score: f64) -> (ReadabilityBand, &'static str) {
    if score >= 60.0 {
        if score >= 80.0 {
            (ReadabilityBand::Easy, "5th Grade")
        } else {
            (ReadabilityBand::Easy, "6th-7th Grade")
        }
    } else if score >= 30.0 {
        if score >= 50.0 {
            (ReadabilityBand::Standard, "8th-9th Grade")
        } else {
            (ReadabilityBand::Standard, "10th-12th Grade")
        }
    } else {
        (ReadabilityBand::Difficult, "College Level")
    }
}

// * Lower-cased, letters-only terms over three characters, tallied and
// * reported as a share of the total word count.
fn keyword_density(text: &str, word_count: usize) -> Vec<KeywordDensity> {
    if word_count == 0 {
        return Vec::new();
    }

    let mut tally: HashMap<String, usize> = HashMap::new();
    for token in text.unicode_words() {
        let term: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(|c| c.to_lowercase())
            .collect();

        if term.len() <= 3 || STOP_WORDS.contains(&term.as_str()) {
            continue;
        }
        *tally.entry(term).or_insert(0) += 1;
    }

    let mut entries: Vec<(String, usize)> = tally
        .into_iter()
        .filter(|(_, count)| *count >= KEYWORD_MIN_COUNT)
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    entries
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|(keyword, count)| KeywordDensity {
            keyword,
            count,
            density: round2(count as f64 / word_count as f64 * 100.0),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_statistics() {
        let text = "The quick brown fox jumps over the lazy dog. A second sentence follows here. Short ones!";
        let html = "<p>one</p><p>two</p>";

        let metrics = ContentAnalyzer::analyze(text, html);
        assert_eq!(metrics.sentence_count, 3);
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.word_count, 16);
        assert!(metrics.flesch_score >= 0.0 && metrics.flesch_score <= 100.0);
    }

    #[test]
    fn test_sentence_count_floors_at_one() {
        let metrics = ContentAnalyzer::analyze("", "");
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.paragraph_count, 0);
        assert!(metrics.top_keywords.is_empty());
    }

    #[test]
    fn test_short_fragments_are_not_sentences() {
        // * "Hi." and "Ok!" are under ten characters and discarded
        let metrics = ContentAnalyzer::analyze("Hi. Ok! This fragment is long enough to count.", "");
        assert_eq!(metrics.sentence_count, 1);
    }

    #[test]
    fn test_syllable_estimates() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("hello"), 2);
        assert_eq!(estimate_syllables("baked"), 1);
        assert_eq!(estimate_syllables("making"), 2);
        assert_eq!(estimate_syllables("readability"), 5);
        // * Leading y is not a syllable on its own
        assert_eq!(estimate_syllables("yellow"), 2);
    }

    #[test]
    fn test_simple_words_score_higher_than_complex() {
        let simple = "The cat sat on the mat all day long. The dog ran to the park with me.";
        let complex = "Extraordinary organizational methodologies facilitate considerable enhancement. \
                       Sophisticated infrastructural considerations necessitate comprehensive evaluation.";

        let easy = ContentAnalyzer::analyze(simple, "").flesch_score;
        let hard = ContentAnalyzer::analyze(complex, "").flesch_score;
        assert!(easy > hard, "easy={easy} hard={hard}");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_for_score(85.0), (ReadabilityBand::Easy, "5th Grade"));
        assert_eq!(band_for_score(65.0), (ReadabilityBand::Easy, "6th-7th Grade"));
        assert_eq!(band_for_score(55.0), (ReadabilityBand::Standard, "8th-9th Grade"));
        assert_eq!(band_for_score(35.0), (ReadabilityBand::Standard, "10th-12th Grade"));
        assert_eq!(band_for_score(10.0), (ReadabilityBand::Difficult, "College Level"));
    }

    #[test]
    fn test_keyword_density_filters_and_ranks() {
        let text = "Plumbing repairs and plumbing installs. Emergency plumbing beats emergency waiting. \
                    The the the and and and.";
        let metrics = ContentAnalyzer::analyze(text, "");

        let top = &metrics.top_keywords[0];
        assert_eq!(top.keyword, "plumbing");
        assert_eq!(top.count, 3);
        assert!(metrics.top_keywords.iter().all(|k| k.keyword.len() > 3));
        assert!(metrics.top_keywords.iter().all(|k| k.count >= 2));
        // * Stop words never surface
        assert!(metrics.top_keywords.iter().all(|k| k.keyword != "and"));
    }

    #[test]
    fn test_long_and_short_sentence_counts() {
        let long_sentence = (0..30).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let text = format!("{long_sentence}. Short and sweet here.");

        let metrics = ContentAnalyzer::analyze(&text, "");
        assert_eq!(metrics.long_sentence_count, 1);
        assert_eq!(metrics.short_sentence_count, 1);
    }
}
