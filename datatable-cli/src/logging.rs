//! Log file setup.

use std::fs;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::paths::{self, AppDirs};

/// Installs a file logger at `<cache dir>/latest.log`.
///
/// The previous log is rotated first. Without a home directory logging is
/// left disabled.
pub fn init(level: LevelFilter, dirs: Option<&AppDirs>) -> Result<(), CliError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(dirs) = dirs else {
        eprintln!("warning: no cache directory, logging disabled");
        return Ok(());
    };

    fs::create_dir_all(dirs.log_dir())?;
    if let Err(e) = paths::rotate_logs(dirs.log_dir(), paths::KEPT_LOGS) {
        eprintln!("warning: log rotation failed: {}", e);
    }
    let path = dirs.log_file();
    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}
