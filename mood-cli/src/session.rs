//! Interactive session loop and reply formatting.

use std::io::Write;

use anyhow::Result;
use mood_core::MoodReply;
use mood_engine::ResponseOrchestrator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Renders a reply for the terminal: text, then a status line.
pub fn format_reply(reply: &MoodReply) -> String {
    let marker = if reply.is_fallback { " (offline reply)" } else { "" };
    format!(
        "{}\n[{} | mood {:.2}{}]",
        reply.response_text, reply.sentiment, reply.mood_score, marker
    )
}

/// Reads messages line by line from `input` until EOF or `/quit`, writing replies to `output`.
/// Returns the number of messages answered.
pub async fn run_session<R, W>(
    orchestrator: &ResponseOrchestrator,
    user: Option<&str>,
    input: R,
    output: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut answered = 0;
    write!(output, "> ")?;
    output.flush()?;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "/quit" => break,
            "/clear" => match user {
                Some(uid) => match orchestrator.clear_history(uid).await {
                    Ok(()) => writeln!(output, "Conversation context cleared.")?,
                    Err(e) => {
                        warn!(error = %e, user_id = %uid, "Failed to clear conversation history");
                        writeln!(output, "Could not clear context: {e}")?;
                    }
                },
                None => writeln!(output, "Anonymous session has no context to clear.")?,
            },
            message => {
                let reply = orchestrator.respond(message, user).await;
                writeln!(output, "{}", format_reply(&reply))?;
                answered += 1;
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(answered)
}
