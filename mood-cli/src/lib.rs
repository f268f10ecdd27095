//! # mood-cli
//!
//! Command-line host: argument parsing, engine assembly from env config and the interactive
//! session loop.

pub mod assembly;
pub mod cli;
pub mod session;

pub use assembly::build_orchestrator;
pub use cli::{Cli, Commands};
pub use session::{format_reply, run_session};
