use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to a daily log file under `log_dir`.
///
/// The terminal belongs to the visualizer, so nothing is written to stdout or
/// stderr. `RUST_LOG` wins over `verbose`. Keep the returned guard alive until
/// exit or buffered lines are lost.
pub fn init_logging(log_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("adb-music.log")
        .build(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = if verbose {
        "adb_music=debug"
    } else {
        "adb_music=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

/// Like [`init_logging`], but a failure only costs the log file.
///
/// Prints one line to stderr and returns `None`; the session runs without a
/// subscriber.
pub fn try_init_logging(log_dir: &Path, verbose: bool) -> Option<WorkerGuard> {
    match init_logging(log_dir, verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "Logging disabled: cannot write logs to {}: {:#}",
                log_dir.display(),
                e
            );
            None
        }
    }
}
