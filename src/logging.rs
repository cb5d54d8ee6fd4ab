use std::path::{Path, PathBuf};

use color_eyre::eyre;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "mapscrape.log";

fn default_log_path() -> eyre::Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| eyre::eyre!("Could not find data directory"))?;

    Ok(data_dir.join("mapscrape").join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating its parent directory if needed.
fn file_appender(path: &Path) -> eyre::Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| eyre::eyre!("Invalid log file path: {}", path.display()))?;

    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)?;

    Ok(appender)
}

/// Sends `tracing` output to a file, the terminal belongs to the UI.
///
/// The returned guard flushes pending lines on drop and must outlive the app.
pub fn init(log_file: Option<&Path>) -> eyre::Result<WorkerGuard> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };

    let (writer, guard) = tracing_appender::non_blocking(file_appender(&path)?);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mapscrape=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    tracing::debug!(path = %path.display(), "logging initialized");

    Ok(guard)
}
