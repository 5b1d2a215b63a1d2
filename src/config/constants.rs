// * Configuration Constants
// * Central location for the engine's thresholds and list caps

// * Page fetch timeout in seconds (fetch collaborator only)
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// * Minimum character length for a fragment to count as a sentence
pub const MIN_SENTENCE_CHARS: usize = 10;

// * Maximum words sampled for syllable estimation on long pages
pub const SYLLABLE_SAMPLE_CAP: usize = 500;

// * Word-count thresholds for long/short sentence classification
pub const LONG_SENTENCE_WORDS: usize = 25;
pub const SHORT_SENTENCE_WORDS: usize = 10;

// * Keyword density: minimum occurrences and reported list size
pub const KEYWORD_MIN_COUNT: usize = 2;
pub const KEYWORD_LIMIT: usize = 15;

// * Anchor text tally: maximum entry length and reported list size
pub const ANCHOR_TEXT_MAX_CHARS: usize = 100;
pub const ANCHOR_TEXT_LIMIT: usize = 10;

// * Maximum broken-link candidates recorded per page
pub const BROKEN_LINK_CAP: usize = 5;

// * Unique internal links below this flag orphan risk
pub const ORPHAN_RISK_THRESHOLD: usize = 5;

// * Characters of body text fed to the category classifier
pub const CLASSIFIER_TEXT_WINDOW: usize = 10_000;

// * Summaries shorter than this get the generic closing sentence
pub const SUMMARY_MIN_CHARS: usize = 200;

// * Maximum body sentences quoted in the summary
pub const SUMMARY_BODY_SENTENCES: usize = 3;
