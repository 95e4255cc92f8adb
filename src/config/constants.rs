//! Constants for partner-builder

use std::path::PathBuf;
use std::sync::OnceLock;

use partner_core::components::{ADDRESSES, PARTNERS, PHONES};

/// Full path of the executable file
pub static EXECUTABLE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Log directory, relative to the executable
pub const LOG_DIR: &str = "logs";

/// Name given to the pipeline built by the CLI
pub const PIPELINE_NAME: &str = "PartnerPipeline";

/// Components run when none are requested
pub const DEFAULT_COMPONENTS: [&str; 3] = [PARTNERS, ADDRESSES, PHONES];

pub fn init_constants() -> std::io::Result<&'static PathBuf> {
    if let Some(path) = EXECUTABLE_PATH.get() {
        return Ok(path);
    }
    let exe_path = std::env::current_exe()?;
    Ok(EXECUTABLE_PATH.get_or_init(|| exe_path))
}
