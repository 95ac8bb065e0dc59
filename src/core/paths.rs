use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, PREFERENCES_FILENAME};

/// Per-user directory for this app's settings, falling back to the temp dir.
pub fn app_config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

pub fn preferences_path() -> PathBuf {
    app_config_root().join(PREFERENCES_FILENAME)
}
