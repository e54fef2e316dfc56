//! File logging for the binaries.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;

/// The directory and file name tracing output for `path` is written to.
///
/// Returns `None` when `path` names no file. A bare file name lands in the
/// current directory.
pub fn log_target(path: &Path) -> Option<(PathBuf, &std::ffi::OsStr)> {
    let file_name = path.file_name()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Some((dir, file_name))
}

/// Send tracing output to `path`. The guard must live until exit so buffered
/// lines get flushed.
pub fn init_logging(path: &Path) -> Option<WorkerGuard> {
    let (dir, file_name) = log_target(path)?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Some(guard)
}
