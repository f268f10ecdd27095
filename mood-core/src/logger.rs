//! Tracing initialisation: fmt layer with level, target, thread ids and span close events.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs the global tracing subscriber.
///
/// The level comes from `RUST_LOG` (e.g. `info`, `mood_engine=debug`) and defaults to `info`.
/// Output always goes to stdout; when `log_file_path` is given the same lines are appended to
/// that file too. Load `.env` (e.g. `dotenvy::dotenv()`) before calling, otherwise `RUST_LOG`
/// from the file is not seen.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(env_filter);

    match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = io::stdout.and(Arc::new(file));
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_ansi(false),
                )
                .try_init()
        }
        None => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
