use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "chanview=info";

/// Sends all logs to `path`. The terminal belongs to the UI, so nothing is
/// ever written to stdout or stderr. Keep the guard alive until exit or the
/// tail of the log is lost.
pub fn init(path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("installing log subscriber")?;

    install_panic_hook();

    tracing::info!(log_file = %path.display(), "tracing initialized");
    Ok(guard)
}

/// Logs panics, then passes them on to the hook installed before, so the
/// message still reaches stderr once the terminal is restored.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));
}
