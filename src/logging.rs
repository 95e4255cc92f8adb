//! Debug log file kept beside the executable

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use partner_core::error::{PartnerError, Result};

use crate::config::constants::{EXECUTABLE_PATH, LOG_DIR, PIPELINE_NAME};

/// `<executable dir>/logs/<pipeline>-<pid>-<started_at>.log`
pub fn log_file_path(executable: &Path, pid: u32, started_at: u64) -> Result<PathBuf> {
    let exe_dir = executable.parent().ok_or_else(|| {
        PartnerError::other(format!("{} has no parent directory", executable.display()))
    })?;

    Ok(exe_dir
        .join(LOG_DIR)
        .join(format!("{PIPELINE_NAME}-{pid}-{started_at}.log")))
}

pub fn open_log_file() -> Result<(File, PathBuf)> {
    let executable = EXECUTABLE_PATH
        .get()
        .ok_or_else(|| PartnerError::other("executable path not initialized"))?;
    let started_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| PartnerError::other(e.to_string()))?
        .as_secs();

    let path = log_file_path(executable, std::process::id(), started_at)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
