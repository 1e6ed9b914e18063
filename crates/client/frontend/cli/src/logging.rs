//! File logging for the terminal client.
//!
//! The transcript owns the terminal, so logs only go to
//! `<log root>/<session>/client.log`.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "client.log";

/// Installs the global subscriber. Keep the guard alive for the whole
/// process or buffered lines are lost.
pub fn setup_logging(session_id: Option<&str>, log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let session = session_id.map(str::to_owned).unwrap_or_else(session_name);
    let root = log_dir.map(Path::to_path_buf).unwrap_or_else(log_root);
    let session_dir = prepare_log_dir(&root, &session)?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::info!(%session, "Logging initialized");
    tracing::info!(
        "Log file: {}",
        session_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// Platform cache directory, falling back to the temp dir.
pub fn log_root() -> PathBuf {
    ProjectDirs::from("", "", "hunt")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("hunt").join("logs"))
}

pub fn session_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{secs}")
}

/// Creates `<root>/<session>` and returns it.
pub fn prepare_log_dir(root: &Path, session: &str) -> Result<PathBuf> {
    let dir = root.join(session);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_directory_is_created_under_root() {
        let root = tempfile::tempdir().unwrap();
        let dir = prepare_log_dir(root.path(), "session_42").unwrap();

        assert_eq!(dir, root.path().join("session_42"));
        assert!(dir.is_dir());
        // Existing directories are fine.
        assert!(prepare_log_dir(root.path(), "session_42").is_ok());
    }

    #[test]
    fn generated_session_names_are_timestamped() {
        let name = session_name();
        let secs = name.strip_prefix("session_").unwrap();
        assert!(secs.parse::<u64>().unwrap() > 0);
    }
}
