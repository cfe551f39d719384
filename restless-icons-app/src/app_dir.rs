//! Project root resolution. All export paths are relative to it.

use std::path::PathBuf;

/// The directory the command is run from. Falls back to `.` if the current
/// directory cannot be determined.
pub fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
