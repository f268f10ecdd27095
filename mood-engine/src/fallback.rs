//! Canned replies used when the upstream completion fails.

use mood_core::Sentiment;
use rand::Rng;

const POSITIVE_REPLIES: &[&str] = &[
    "That's wonderful! 🌟 I'm so happy to hear that! What specifically is making you feel this way?",
    "Your positive energy is amazing! 😊 Tell me more about what's bringing you joy today!",
];

const NEGATIVE_REPLIES: &[&str] = &[
    "I hear you, and I'm here for you. 💙 What's weighing on your mind right now?",
    "That sounds really tough. 💚 Would it help to talk about what's happening?",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "Thanks for sharing with me. 😊 How are you really feeling today?",
    "I'm here to listen and help. 💭 What's on your mind?",
];

/// The fixed fallback set for `sentiment`.
pub fn fallback_replies(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Positive => POSITIVE_REPLIES,
        Sentiment::Negative => NEGATIVE_REPLIES,
        Sentiment::Neutral => NEUTRAL_REPLIES,
    }
}

/// Picks one reply uniformly at random from the set for `sentiment`.
pub fn fallback_reply(sentiment: Sentiment) -> &'static str {
    fallback_reply_with(&mut rand::thread_rng(), sentiment)
}

pub fn fallback_reply_with<R: Rng + ?Sized>(rng: &mut R, sentiment: Sentiment) -> &'static str {
    let replies = fallback_replies(sentiment);
    replies[rng.gen_range(0..replies.len())]
}
