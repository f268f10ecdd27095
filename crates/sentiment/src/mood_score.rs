//! Mood score: a number in `[0, 1]` drawn uniformly from a band keyed by sentiment.

use std::ops::RangeInclusive;

use mood_core::Sentiment;
use rand::Rng;

/// Band the score for `sentiment` is drawn from.
pub fn mood_band(sentiment: Sentiment) -> RangeInclusive<f64> {
    match sentiment {
        Sentiment::Positive => 0.70..=1.00,
        Sentiment::Negative => 0.00..=0.40,
        Sentiment::Neutral => 0.35..=0.75,
    }
}

/// Draws a score using the calling thread's generator. Not idempotent.
pub fn mood_score(sentiment: Sentiment) -> f64 {
    mood_score_with(&mut rand::thread_rng(), sentiment)
}

/// Draws a score from the supplied generator (seedable in tests).
pub fn mood_score_with<R: Rng + ?Sized>(rng: &mut R, sentiment: Sentiment) -> f64 {
    rng.gen_range(mood_band(sentiment))
}
