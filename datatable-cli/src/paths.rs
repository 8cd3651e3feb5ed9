//! Per-user directories and log rotation.
//!
//! Locations follow the platform conventions of `directories`: XDG on Linux,
//! `~/Library` on macOS and `AppData` on Windows.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Name of the log file written by the running session.
pub const LATEST_LOG: &str = "latest.log";

/// Archived logs kept after rotation.
pub const KEPT_LOGS: usize = 25;

/// Resolved per-user directories for the `datatable` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    cache: PathBuf,
    config: PathBuf,
}

impl AppDirs {
    /// Resolves the directories, or `None` without a home directory.
    pub fn locate() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "norpie", "datatable")?;
        Some(Self {
            cache: dirs.cache_dir().to_path_buf(),
            config: dirs.config_dir().to_path_buf(),
        })
    }

    /// Directory holding the session logs.
    pub fn log_dir(&self) -> &Path {
        &self.cache
    }

    /// Log file of the running session.
    pub fn log_file(&self) -> PathBuf {
        self.cache.join(LATEST_LOG)
    }

    /// Default table options file.
    pub fn options_file(&self) -> PathBuf {
        self.config.join("options.json")
    }
}

/// Archives `latest.log` under a timestamped name and prunes old archives.
///
/// Archive names are `%Y%m%d_%H%M%S.log`, so name order is age order.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<()> {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(&latest, dir.join(format!("{}.log", stamp)))?;
    }

    let mut archived: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_archived_log(path))
        .collect();
    archived.sort();

    let excess = archived.len().saturating_sub(keep);
    for path in &archived[..excess] {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn is_archived_log(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "log")
        && path.file_name().is_some_and(|name| name != LATEST_LOG)
}
