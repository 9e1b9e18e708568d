//! Yearly raw table sources
//!
//! - `pfr`: pro-football-reference fantasy tables over HTTP
//! - `adp`: average-draft-position CSV exports on disk

pub mod adp;
pub mod pfr;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::{
    cli::types::{Season, YearRange},
    error::{HistoryError, Result},
};

pub use adp::AdpCsvSource;
pub use pfr::PfrFantasySource;

/// One year's table exactly as the source delivered it, every cell trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub year: Season,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Anything that can produce a raw table for a given season.
#[async_trait]
pub trait TableSource {
    async fn fetch_table(&self, year: Season) -> Result<RawTable>;
}

/// Tables collected over a year range, with the years that failed.
#[derive(Debug, Default)]
pub struct YearlyTables {
    pub tables: BTreeMap<Season, RawTable>,
    pub failures: BTreeMap<Season, String>,
}

impl YearlyTables {
    /// Years of `range` that produced no table.
    pub fn missing_years(&self, range: &YearRange) -> Vec<Season> {
        range
            .iter()
            .filter(|year| !self.tables.contains_key(year))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Fetch every year of `range` in order. A failing year is logged and recorded
/// but does not stop the remaining years.
pub async fn fetch_years<S>(source: &S, range: &YearRange) -> YearlyTables
where
    S: TableSource + Sync + ?Sized,
{
    let mut out = YearlyTables::default();
    for year in range.iter() {
        match source.fetch_table(year).await {
            Ok(table) => {
                info!("Fetched {year}: {} rows", table.rows.len());
                out.tables.insert(year, table);
            }
            Err(e) => {
                warn!("Skipping {year}: {e}");
                out.failures.insert(year, e.to_string());
            }
        }
    }
    out
}

/// Every year must carry the same header list, in the same order, as the
/// earliest year.
pub fn check_column_consistency<'a, I>(tables: I) -> Result<()>
where
    I: IntoIterator<Item = &'a RawTable>,
{
    let mut reference: Option<&RawTable> = None;
    for table in tables {
        match reference {
            None => reference = Some(table),
            Some(first) if first.headers != table.headers => {
                return Err(HistoryError::ColumnMismatch {
                    year: table.year,
                    expected: first.headers.clone(),
                    found: table.headers.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
