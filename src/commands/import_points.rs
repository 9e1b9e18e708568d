//! `import points`: season performance from pro-football-reference.

use std::path::PathBuf;

use tracing::info;

use super::common::{report_missing_years, snapshot_store, year_range, ImportSummary};
use crate::{
    error::{HistoryError, Result},
    normalize::{normalize, performance_rows, PERFORMANCE_SCHEMA},
    reconcile::Reconciler,
    sources::{check_column_consistency, fetch_years, PfrFantasySource, TableSource},
    storage::{SnapshotStore, PERFORMANCE_SNAPSHOT},
    Season, YearRange,
};

/// Fetch, normalize and reconcile every season of `range`, then save the rows
/// as the performance snapshot.
///
/// Missing years are reported but do not fail the import; column drift
/// between years does.
pub async fn import_points<S>(
    source: &S,
    range: &YearRange,
    store: &SnapshotStore,
) -> Result<ImportSummary>
where
    S: TableSource + Sync + ?Sized,
{
    info!("Importing season performance for {range}");
    let fetched = fetch_years(source, range).await;
    let missing = fetched.missing_years(range);
    report_missing_years(&missing, range);
    if fetched.is_empty() {
        return Err(HistoryError::NoData);
    }
    let failures = fetched.failures.clone();

    check_column_consistency(fetched.tables.values())?;
    let table = normalize(fetched.tables.values(), PERFORMANCE_SCHEMA)?;
    let mut rows = performance_rows(&table);

    let corrections = Reconciler::default().reconcile(&mut rows);
    let path = store.save(PERFORMANCE_SNAPSHOT, &rows)?;

    Ok(ImportSummary {
        rows: rows.len(),
        years: fetched.tables.len(),
        missing,
        failures,
        corrections,
        path,
    })
}

/// Handle the `import points` command
pub async fn handle_import_points(
    start: Season,
    end: Option<Season>,
    snapshot_dir: Option<PathBuf>,
) -> Result<()> {
    let range = year_range(start, end)?;
    let store = snapshot_store(snapshot_dir);
    let source = PfrFantasySource::new()?;

    let summary = import_points(&source, &range, &store).await?;
    summary.print("performance");
    Ok(())
}
