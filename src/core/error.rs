use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to a preference backend.
///
/// None of these reach the user: callers log them and fall back to defaults.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// No backend exists on this platform or in this context
    #[cfg(any(target_arch = "wasm32", test))]
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to access preferences file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preference value: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused a read or write (quota, privacy mode)
    #[cfg(any(target_arch = "wasm32", test))]
    #[error("preference storage rejected '{key}': {reason}")]
    Storage { key: String, reason: String },
}
