use crate::persistence::log_dir;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive; drop it last
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Route `tracing` output to a daily rolling file under `<root>/logs`.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging(root: &Path) -> Result<LoggingGuard> {
    let dir = log_dir(root);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, "checklist.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to set global tracing subscriber")?;

    tracing::debug!(dir = %dir.display(), "Logging initialized");
    Ok(LoggingGuard { _guard: guard })
}
