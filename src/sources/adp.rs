//! Yearly PPR average-draft-position CSV exports.

use async_trait::async_trait;
use std::{
    fs::File,
    io::Read,
    path::PathBuf,
};

use super::{RawTable, TableSource};
use crate::{
    cli::types::Season,
    error::{HistoryError, Result},
};

/// Columns kept from each export; everything else in the file is ignored.
pub const ADP_COLUMNS: [&str; 5] = [
    "Name",
    "Team",
    "Position",
    "PositionRank",
    "AverageDraftPositionPPR",
];

/// Reads `{dir}/ppr-adp-{year}.csv`.
#[derive(Debug, Clone)]
pub struct AdpCsvSource {
    dir: PathBuf,
}

impl AdpCsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, year: Season) -> PathBuf {
        self.dir.join(format!("ppr-adp-{year}.csv"))
    }
}

#[async_trait]
impl TableSource for AdpCsvSource {
    async fn fetch_table(&self, year: Season) -> Result<RawTable> {
        let file = File::open(self.path_for(year))?;
        read_adp_csv(file, year)
    }
}

/// Project an export down to [`ADP_COLUMNS`], keeping the order in which they
/// appear in the file.
pub fn read_adp_csv<R: Read>(rdr: R, year: Season) -> Result<RawTable> {
    let mut reader = csv::Reader::from_reader(rdr);
    let file_headers = reader.headers()?.clone();

    let selected: Vec<(usize, String)> = file_headers
        .iter()
        .enumerate()
        .map(|(i, h)| (i, h.trim_start_matches('\u{feff}').trim().to_string()))
        .filter(|(_, h)| ADP_COLUMNS.contains(&h.as_str()))
        .collect();

    if let Some(missing) = ADP_COLUMNS
        .iter()
        .find(|col| !selected.iter().any(|(_, h)| h == *col))
    {
        return Err(HistoryError::MissingColumn {
            year,
            column: missing.to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            selected
                .iter()
                .map(|(i, _)| record.get(*i).unwrap_or("").trim().to_string())
                .collect(),
        );
    }

    Ok(RawTable {
        year,
        headers: selected.into_iter().map(|(_, h)| h).collect(),
        rows,
    })
}
