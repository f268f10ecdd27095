//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mood")]
#[command(about = "Mood AI companion: send one message or chat interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message and print the reply, sentiment and mood score.
    Send {
        message: String,
        /// Remember the exchange under this user id; anonymous when omitted.
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Line-oriented session on stdin. `/clear` forgets the context, `/quit` exits.
    Chat {
        #[arg(short, long)]
        user: Option<String>,
    },
}
