//! Keyword-table sentiment classifier.

use mood_core::Sentiment;

// ── Keyword tables ──────────────────────────────────────────────────────

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy",
    "joy",
    "great",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "excited",
    "grateful",
    "thankful",
    "blessed",
    "proud",
    "delighted",
    "cheerful",
    "love",
    "better",
    "good",
    "awesome",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "angry",
    "anxious",
    "worried",
    "stressed",
    "upset",
    "frustrated",
    "hurt",
    "pain",
    "crying",
    "lonely",
    "hopeless",
    "scared",
    "afraid",
    "terrible",
    "horrible",
    "bad",
    "worse",
    "overwhelmed",
];

/// Number of distinct positive and negative keywords found as substrings of `text`.
///
/// Matching is case-insensitive and not word-bounded ("badge" counts "bad"). Each keyword
/// counts once however often it repeats.
pub fn keyword_counts(text: &str) -> (usize, usize) {
    let lower = text.to_lowercase();
    let hits = |table: &[&str]| table.iter().filter(|kw| lower.contains(*kw)).count();
    (hits(POSITIVE_KEYWORDS), hits(NEGATIVE_KEYWORDS))
}

/// Classifies `text`; empty or whitespace-only text and ties are [`Sentiment::Neutral`].
pub fn classify(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::Neutral;
    }
    let (positive, negative) = keyword_counts(text);
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
