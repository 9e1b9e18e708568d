//! `import adp`: yearly average-draft-position exports.

use std::path::PathBuf;

use tracing::{info, warn};

use super::common::{
    report_missing_years, resolve_adp_dir, snapshot_store, year_range, ImportSummary,
};
use crate::{
    error::{HistoryError, Result},
    normalize::{draft_rows, normalize, DRAFT_SCHEMA},
    reconcile::{check_team_spans, Reconciler, TeamSpan},
    sources::{check_column_consistency, fetch_years, AdpCsvSource, TableSource},
    storage::{SnapshotStore, DRAFT_POSITION_SNAPSHOT},
    Season, YearRange,
};

/// How strictly to treat short-lived team codes.
#[derive(Debug, Clone, Copy)]
pub struct SpanCheck {
    pub threshold: u16,
    pub allow_violations: bool,
}

/// Fetch, normalize and reconcile ADP for `range`, validate team spans, then
/// save the draft-position snapshot.
///
/// Span violations are returned alongside the summary. Unless
/// `allow_violations` is set they abort the import before anything is saved.
pub async fn import_adp<S>(
    source: &S,
    range: &YearRange,
    store: &SnapshotStore,
    spans: SpanCheck,
) -> Result<(ImportSummary, Vec<TeamSpan>)>
where
    S: TableSource + Sync + ?Sized,
{
    info!("Importing draft position for {range}");
    let fetched = fetch_years(source, range).await;
    let missing = fetched.missing_years(range);
    report_missing_years(&missing, range);
    if fetched.is_empty() {
        return Err(HistoryError::NoData);
    }
    let failures = fetched.failures.clone();

    check_column_consistency(fetched.tables.values())?;
    let table = normalize(fetched.tables.values(), DRAFT_SCHEMA)?;
    let mut rows = draft_rows(&table);
    let corrections = Reconciler::default().reconcile(&mut rows);

    let violations = check_team_spans(&rows, spans.threshold);
    for v in &violations {
        warn!(
            "Team {} only spans {}..={} ({} years)",
            v.team,
            v.first,
            v.last,
            v.span()
        );
    }
    if !violations.is_empty() && !spans.allow_violations {
        return Err(HistoryError::TeamSpanViolation {
            teams: violations.iter().map(|v| v.team.clone()).collect(),
        });
    }

    let path = store.save(DRAFT_POSITION_SNAPSHOT, &rows)?;
    Ok((
        ImportSummary {
            rows: rows.len(),
            years: fetched.tables.len(),
            missing,
            failures,
            corrections,
            path,
        },
        violations,
    ))
}

/// Handle the `import adp` command
pub async fn handle_import_adp(
    dir: Option<PathBuf>,
    start: Season,
    end: Option<Season>,
    spans: SpanCheck,
    snapshot_dir: Option<PathBuf>,
) -> Result<()> {
    let range = year_range(start, end)?;
    let source = AdpCsvSource::new(resolve_adp_dir(dir)?);
    let store = snapshot_store(snapshot_dir);

    let (summary, violations) = import_adp(&source, &range, &store, spans).await?;
    summary.print("draft position");
    if !violations.is_empty() {
        let teams: Vec<&str> = violations.iter().map(|v| v.team.as_str()).collect();
        println!("⚠ Saved despite short team spans: {}", teams.join(", "));
    }
    Ok(())
}
