//! # mood-core
//!
//! Core types shared by every crate of the mood companion: [`Sentiment`], [`MoodReply`],
//! the [`MoodError`] enum and tracing initialisation. Transport-agnostic; used by
//! mood-engine, chat-service and mood-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{MoodError, Result};
pub use logger::init_tracing;
pub use types::{MoodReply, Sentiment};
