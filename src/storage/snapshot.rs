//! Flat JSON snapshots of intermediate tables

use crate::core::ensure_parent_dir;
use crate::error::{HistoryError, Result};
use crate::storage::models::{MergedCsvRow, MergedRecord};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::info;

pub const PERFORMANCE_SNAPSHOT: &str = "performance";
pub const DRAFT_POSITION_SNAPSHOT: &str = "draft_position";
pub const MERGED_SNAPSHOT: &str = "merged";

/// Reads and writes named snapshots under a root directory.
///
/// Every call opens its own file handle and drops it before returning, on
/// success and on error alike.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path: {root}/{name}.json
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    pub fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.path(name);
        ensure_parent_dir(&path)?;

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;

        info!("Saved snapshot {name:?} to {}", path.display());
        Ok(path)
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.try_load(name)?
            .ok_or_else(|| HistoryError::SnapshotMissing {
                name: name.to_string(),
                path: self.path(name).display().to_string(),
            })
    }

    /// Like [`load`](Self::load), but a missing file is `Ok(None)`.
    pub fn try_load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(value))
    }
}

/// Write the merged table as flat CSV for the regression step.
pub fn export_csv(path: &Path, records: &[MergedRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(MergedCsvRow::from(record))?;
    }
    writer.flush()?;
    info!("Exported {} merged rows to {}", records.len(), path.display());
    Ok(())
}
