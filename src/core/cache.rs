//! File system locations for pipeline snapshots

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Path: ~/.cache/ffl-history
pub fn default_snapshot_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-history")
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
