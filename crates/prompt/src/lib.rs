//! # Prompt
//!
//! Turns (system / user / assistant messages) and the outbound message list sent to the LLM.
//!
//! ## Format
//!
//! - **System**: exactly one leading message, generated from the detected [`Sentiment`]
//!   by [`system_prompt`]. Never stored in conversation memory.
//! - **History**: prior turns of the same user, oldest first.
//! - **Current question**: one final `User` message.
//!
//! ## External interactions
//!
//! - **AI models**: output of [`build_messages`] is sent as the `messages` array of an
//!   OpenAI-compatible chat completion request.

use mood_core::Sentiment;
use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
/// Immutable once built; history stores clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Persona line opening every system prompt.
pub const PERSONA: &str = "You are Mood AI, a warm and caring mental wellness companion. \
Respond naturally like a supportive friend. Be specific and helpful.\n\n";

const POSITIVE_GUIDANCE: &str = "The user is happy! Match their energy. Be enthusiastic. \
If they ask for songs, give 5-7 SPECIFIC song titles with artists. \
Example: '1. Happy by Pharrell Williams, 2. Good Vibrations by The Beach Boys'\n";

const NEGATIVE_GUIDANCE: &str = "The user is struggling. Be gentle and supportive. \
Offer specific help: breathing exercises, calming activities. \
If they ask for songs, give calming music with specific titles.\n";

const NEUTRAL_GUIDANCE: &str = "Be warm and conversational. \
When asked for recommendations, always give specific examples. \
If asked for songs, list actual song titles and artists.\n";

/// Closing instruction shared by all three variants: numbered song lists, length cap, emojis.
pub const CLOSING_INSTRUCTION: &str = "\nIMPORTANT: When the user asks for songs, ALWAYS provide a numbered list \
with specific song titles and artists. Never be vague!\n\
Example:\n\
1. 'Happy' by Pharrell Williams\n\
2. 'Don't Stop Me Now' by Queen\n\
3. 'Good Life' by OneRepublic\n\n\
Keep responses friendly, specific, and under 200 words. Use 1-2 emojis.";

/// Builds the system prompt for the detected sentiment.
pub fn system_prompt(sentiment: Sentiment) -> String {
    let guidance = match sentiment {
        Sentiment::Positive => POSITIVE_GUIDANCE,
        Sentiment::Negative => NEGATIVE_GUIDANCE,
        Sentiment::Neutral => NEUTRAL_GUIDANCE,
    };
    let mut prompt =
        String::with_capacity(PERSONA.len() + guidance.len() + CLOSING_INSTRUCTION.len());
    prompt.push_str(PERSONA);
    prompt.push_str(guidance);
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

/// Assembles the outbound message list.
///
/// # Order
///
/// System(sentiment prompt) → `history` in the given order → User(`current_question`).
///
/// Pure: callers fetch `history` (empty for anonymous users) and pass it in.
pub fn build_messages<H>(sentiment: Sentiment, history: H, current_question: &str) -> Vec<ChatMessage>
where
    H: IntoIterator<Item = ChatMessage>,
{
    let history = history.into_iter();
    let mut messages = Vec::with_capacity(history.size_hint().0 + 2);
    messages.push(ChatMessage::system(system_prompt(sentiment)));
    messages.extend(history);
    messages.push(ChatMessage::user(current_question));
    messages
}
