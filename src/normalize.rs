//! Schema normalization: yearly raw tables into one typed table per dataset.

use tracing::{debug, warn};

use crate::{
    cli::types::{Position, Season},
    error::{HistoryError, Result},
    sources::RawTable,
    storage::models::{DraftPositionRecord, ReferenceTotals, StatLine, StatRow},
};


/// Canonical column names for one dataset, in source order.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Schema {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

/// Layout of the pro-football-reference fantasy table.
pub const PERFORMANCE_SCHEMA: Schema = Schema {
    name: "performance",
    columns: &[
        "rank",
        "player",
        "team",
        "position",
        "age",
        "games",
        "games_started",
        "pass_cmp",
        "pass_att",
        "pass_yds",
        "pass_td",
        "pass_int",
        "rush_att",
        "rush_yds",
        "rush_ypa",
        "rush_td",
        "targets",
        "receptions",
        "rec_yds",
        "rec_ypr",
        "rec_td",
        "fumbles",
        "fumbles_lost",
        "total_td",
        "two_pt_made",
        "two_pt_passed",
        "fantasy_points",
        "ppr_points",
        "dk_points",
        "fd_points",
        "vbd",
        "pos_rank",
        "overall_rank",
    ],
};

/// Layout of the ADP export after column selection.
pub const DRAFT_SCHEMA: Schema = Schema {
    name: "draft_position",
    columns: &["name", "team", "position", "position_rank", "adp_ppr"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub index: usize,
    pub year: Season,
    pub cells: Vec<String>,
}

/// All years concatenated under canonical column names.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub schema: Schema,
    pub rows: Vec<NormalizedRow>,
}

impl NormalizedTable {
    /// Cell of `row` under canonical `column`; empty when the column is unknown.
    pub fn value<'a>(&self, row: &'a NormalizedRow, column: &str) -> &'a str {
        self.schema
            .index_of(column)
            .and_then(|i| row.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Rows that only repeat the header or carry nothing at all.
fn is_filler(row: &[String], headers: &[String]) -> bool {
    if row.iter().all(|c| c.is_empty()) {
        return true;
    }
    row.iter()
        .zip(headers)
        .take(2)
        .any(|(cell, header)| !header.is_empty() && cell == header)
}

/// The spanning row above the column headers (Passing, Rushing, ...), which
/// the site repeats inside the body. It is narrower than the table and holds
/// no numbers.
fn is_group_header(row: &[String], width: usize) -> bool {
    row.len() < width && !row.iter().any(|c| c.chars().any(|ch| ch.is_ascii_digit()))
}

/// Concatenate `tables` in the order given, renaming columns to `schema`.
///
/// A table whose column count differs from the schema is schema drift and
/// fails the whole call.
pub fn normalize<'a, I>(tables: I, schema: Schema) -> Result<NormalizedTable>
where
    I: IntoIterator<Item = &'a RawTable>,
{
    let mut rows = Vec::new();

    for table in tables {
        if table.column_count() != schema.len() {
            return Err(HistoryError::SchemaDrift {
                year: table.year,
                expected: schema.len(),
                found: table.column_count(),
            });
        }

        let mut dropped = 0usize;
        for raw in &table.rows {
            if is_group_header(raw, schema.len()) {
                debug!(
                    "{} {}: dropping column-group row {:?}",
                    schema.name, table.year, raw
                );
                dropped += 1;
                continue;
            }
            if raw.len() != schema.len() {
                warn!(
                    "{} {}: dropping row with {} cells (expected {})",
                    schema.name,
                    table.year,
                    raw.len(),
                    schema.len()
                );
                dropped += 1;
                continue;
            }
            if is_filler(raw, &table.headers) {
                dropped += 1;
                continue;
            }
            rows.push(NormalizedRow {
                index: rows.len(),
                year: table.year,
                cells: raw.clone(),
            });
        }
        debug!("{} {}: dropped {dropped} non-data rows", schema.name, table.year);
    }

    Ok(NormalizedTable { schema, rows })
}

fn parse_f64(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn parse_u8(cell: &str) -> Option<u8> {
    cell.trim().parse().ok()
}

/// Drop the `*` (Pro Bowl) and `+` (All-Pro) markers the site appends to names.
pub fn clean_player_name(raw: &str) -> String {
    raw.trim().trim_end_matches(['*', '+']).trim().to_string()
}

/// First run of digits in a label like `RB12`.
pub fn extract_rank(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Typed performance rows. Empty or unparsable statistics become `None`; an
/// unknown position label becomes `None` and is dropped after scoring.
pub fn performance_rows(table: &NormalizedTable) -> Vec<StatRow> {
    let f = |row: &NormalizedRow, column: &str| parse_f64(table.value(row, column));

    table
        .rows
        .iter()
        .filter_map(|row| {
            let player = clean_player_name(table.value(row, "player"));
            if player.is_empty() {
                return None;
            }
            let position_label = table.value(row, "position");
            Some(StatRow {
                player,
                year: row.year,
                team: table.value(row, "team").to_string(),
                position: position_label.parse::<Position>().ok(),
                age: parse_u8(table.value(row, "age")),
                games: parse_u8(table.value(row, "games")),
                stats: StatLine {
                    pass_yds: f(row, "pass_yds"),
                    pass_td: f(row, "pass_td"),
                    pass_int: f(row, "pass_int"),
                    rush_yds: f(row, "rush_yds"),
                    rush_td: f(row, "rush_td"),
                    receptions: f(row, "receptions"),
                    rec_yds: f(row, "rec_yds"),
                    rec_td: f(row, "rec_td"),
                    fumbles_lost: f(row, "fumbles_lost"),
                    two_pt_made: f(row, "two_pt_made"),
                    two_pt_passed: f(row, "two_pt_passed"),
                },
                reference: ReferenceTotals {
                    standard: f(row, "fantasy_points"),
                    ppr: f(row, "ppr_points"),
                },
            })
        })
        .collect()
}

/// Typed draft-position rows. Only QB, RB, WR and TE survive; rows without a
/// numeric ADP are skipped.
pub fn draft_rows(table: &NormalizedTable) -> Vec<DraftPositionRecord> {
    let mut off_position = 0usize;
    let records: Vec<DraftPositionRecord> = table
        .rows
        .iter()
        .filter_map(|row| {
            let name = table.value(row, "name").trim().to_string();
            let Ok(position) = table.value(row, "position").parse::<Position>() else {
                off_position += 1;
                return None;
            };
            let Some(adp_ppr) = parse_f64(table.value(row, "adp_ppr")) else {
                warn!("{}: skipping {name:?}, no ADP value", row.year);
                return None;
            };
            Some(DraftPositionRecord {
                name,
                year: row.year,
                team: table.value(row, "team").to_string(),
                position,
                position_rank: extract_rank(table.value(row, "position_rank")),
                adp_ppr,
            })
        })
        .collect();
    debug!("Dropped {off_position} draft rows outside QB/RB/WR/TE");
    records
}
