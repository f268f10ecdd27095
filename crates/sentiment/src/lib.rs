//! # Sentiment
//!
//! Lightweight heuristics over a user message:
//!
//! - [`classify`] maps text to a [`Sentiment`] by counting keyword hits.
//! - [`mood_score`] draws a pseudo-random score in a band keyed by the sentiment.
//!
//! Both run synchronously in microseconds; no model, no I/O.

mod classifier;
mod mood_score;

pub use classifier::{classify, keyword_counts, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use mood_core::Sentiment;
pub use mood_score::{mood_band, mood_score, mood_score_with};
