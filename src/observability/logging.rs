use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Dropping the guard flushes and stops the background writer, so it has
// to live for the whole process.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Console logging plus a JSON log file with daily rotation under `logs/`.
///
/// `RUST_LOG` overrides the default filter, which keeps this crate at
/// debug and everything else at info.
pub fn init_logging() {
    let _ = std::fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "fe-stats.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fe_stats=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
        .init();

    let _ = LOG_GUARD.set(guard);
}
