//! Path utilities for sentinel.
//!
//! Configuration lives under `~/.sentinel/config.toml`.

use std::path::{Path, PathBuf};

/// Returns the sentinel home directory (`~/.sentinel/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sentinel")
}

/// Returns the default config file path (`~/.sentinel/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// True when `path` is the default config path.
///
/// A missing default config means "use built-in defaults"; a missing
/// explicitly given file is an error.
pub fn is_default_config(path: &Path) -> bool {
    path == default_config()
}
