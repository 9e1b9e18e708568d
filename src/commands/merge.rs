//! `merge`: score the performance snapshot and join it with draft position.

use std::path::{Path, PathBuf};

use super::common::snapshot_store;
use crate::{
    error::Result,
    merge::{merge, MergeReport},
    scoring::score_rows,
    storage::{
        export_csv, DraftPositionRecord, MergedRecord, SnapshotStore, StatRow,
        DRAFT_POSITION_SNAPSHOT, MERGED_SNAPSHOT, PERFORMANCE_SNAPSHOT,
    },
    ScoringScheme,
};

/// Load both imported snapshots, score under `scheme`, join, and save the
/// merged snapshot.
pub fn merge_snapshots(
    store: &SnapshotStore,
    scheme: ScoringScheme,
) -> Result<(Vec<MergedRecord>, MergeReport)> {
    let stat_rows: Vec<StatRow> = store.load(PERFORMANCE_SNAPSHOT)?;
    let draft: Vec<DraftPositionRecord> = store.load(DRAFT_POSITION_SNAPSHOT)?;

    let performance = score_rows(stat_rows, scheme)?;
    let (rows, report) = merge(performance, draft);

    store.save(MERGED_SNAPSHOT, &rows)?;
    Ok((rows, report))
}

fn print_report(report: &MergeReport) {
    println!(
        "{:<6} {:>8} {:>12} {:>10}",
        "Year", "Matched", "Perf only", "ADP only"
    );
    for (year, c) in &report.by_year {
        println!(
            "{:<6} {:>8} {:>12} {:>10}",
            year, c.matched, c.performance_only, c.draft_only
        );
    }
    let t = report.totals();
    println!(
        "{:<6} {:>8} {:>12} {:>10}",
        "Total", t.matched, t.performance_only, t.draft_only
    );

    if !report.conflicts.is_empty() {
        println!();
        println!("⚠ {} position conflicts:", report.conflicts.len());
        for c in &report.conflicts {
            println!(
                "  {} ({}): performance {}, draft {}",
                c.player, c.year, c.performance_position, c.draft_position
            );
        }
    }
}

/// Handle the `merge` command
pub fn handle_merge(
    scheme: ScoringScheme,
    csv: Option<PathBuf>,
    as_json: bool,
    snapshot_dir: Option<PathBuf>,
) -> Result<()> {
    let store = snapshot_store(snapshot_dir);
    let (rows, report) = merge_snapshots(&store, scheme)?;

    if let Some(path) = csv.as_deref() {
        write_csv(path, &rows)?;
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✓ Merged {} rows under {scheme} scoring into {}",
            rows.len(),
            store.path(MERGED_SNAPSHOT).display()
        );
        print_report(&report);
    }
    Ok(())
}

fn write_csv(path: &Path, rows: &[MergedRecord]) -> Result<()> {
    export_csv(path, rows)?;
    eprintln!("CSV written to {}", path.display());
    Ok(())
}
