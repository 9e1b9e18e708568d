//! Helpers shared by the import and merge commands.

use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    core::default_snapshot_dir,
    error::{HistoryError, Result},
    reconcile::ReconcileReport,
    storage::SnapshotStore,
    Season, YearRange, ADP_DIR_ENV_VAR, SNAPSHOT_DIR_ENV_VAR,
};

/// What an import run fetched, corrected and saved.
#[derive(Debug)]
pub struct ImportSummary {
    pub rows: usize,
    pub years: usize,
    pub missing: Vec<Season>,
    /// Why each failed year could not be fetched.
    pub failures: BTreeMap<Season, String>,
    pub corrections: ReconcileReport,
    pub path: PathBuf,
}

impl ImportSummary {
    pub fn print(&self, what: &str) {
        println!(
            "✓ Saved {} {what} rows from {} years to {}",
            self.rows,
            self.years,
            self.path.display()
        );
        if self.corrections.records_changed > 0 {
            println!(
                "  {} records changed by reconciliation:",
                self.corrections.records_changed
            );
            for (label, count) in &self.corrections.changes {
                println!("    {label:<28} {count}");
            }
        }
        if !self.missing.is_empty() {
            let years: Vec<String> = self.missing.iter().map(Season::to_string).collect();
            println!("⚠ Missing years: {}", years.join(", "));
            for (year, reason) in &self.failures {
                println!("    {year}: {reason}");
            }
        }
    }
}

/// Explicit flag, then `FFL_HISTORY_SNAPSHOT_DIR`, then the user cache dir.
pub fn resolve_snapshot_dir(snapshot_dir: Option<PathBuf>) -> PathBuf {
    snapshot_dir
        .or_else(|| {
            std::env::var(SNAPSHOT_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_snapshot_dir)
}

pub fn snapshot_store(snapshot_dir: Option<PathBuf>) -> SnapshotStore {
    SnapshotStore::new(resolve_snapshot_dir(snapshot_dir))
}

/// Explicit flag, then `FFL_HISTORY_ADP_DIR`. There is no default.
pub fn resolve_adp_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    dir.or_else(|| {
        std::env::var(ADP_DIR_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .ok_or_else(|| HistoryError::MissingAdpDir {
        env_var: ADP_DIR_ENV_VAR.to_string(),
    })
}

/// `start..end`, with `end` defaulting to the current year.
pub fn year_range(start: Season, end: Option<Season>) -> Result<YearRange> {
    match end {
        Some(end) => YearRange::new(start, end),
        None => YearRange::through_current(start),
    }
}

/// Log the years of `range` that yielded no table.
pub fn report_missing_years(missing: &[Season], range: &YearRange) {
    if missing.is_empty() {
        return;
    }
    let years: Vec<String> = missing.iter().map(Season::to_string).collect();
    tracing::warn!(
        "{} of {} years in {range} are missing: {}",
        missing.len(),
        range.len(),
        years.join(", ")
    );
}
