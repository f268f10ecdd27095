//! mood CLI: send one message or chat interactively. Config from env (`.env` is loaded).

use anyhow::{Context, Result};
use clap::Parser;
use llm_client::EnvLlmConfig;
use mood_cli::{build_orchestrator, format_reply, run_session, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    mood_core::init_tracing(cli.log_file.as_deref())?;

    let config = EnvLlmConfig::from_env().context("Load LLM config from env")?;
    let orchestrator = build_orchestrator(&config)?;

    match cli.command {
        Commands::Send { message, user } => {
            let reply = orchestrator.respond(&message, user.as_deref()).await;
            println!("{}", format_reply(&reply));
        }
        Commands::Chat { user } => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let answered = run_session(&orchestrator, user.as_deref(), stdin, &mut std::io::stdout()).await?;
            tracing::info!(answered, "Session ended");
        }
    }
    Ok(())
}
