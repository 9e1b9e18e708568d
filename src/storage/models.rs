//! Data models for the pipeline's tables

use crate::cli::types::{Position, ScoringScheme, Season};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw per-category season statistics. `None` means the source cell was empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub pass_yds: Option<f64>,
    pub pass_td: Option<f64>,
    pub pass_int: Option<f64>,
    pub rush_yds: Option<f64>,
    pub rush_td: Option<f64>,
    pub receptions: Option<f64>,
    pub rec_yds: Option<f64>,
    pub rec_td: Option<f64>,
    pub fumbles_lost: Option<f64>,
    pub two_pt_made: Option<f64>,
    pub two_pt_passed: Option<f64>,
}

/// Fantasy totals published by the performance source itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTotals {
    /// Non-PPR total.
    pub standard: Option<f64>,
    /// Full-PPR total.
    pub ppr: Option<f64>,
}

/// A normalized performance row before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub player: String,
    pub year: Season,
    pub team: String,
    pub position: Option<Position>,
    pub age: Option<u8>,
    pub games: Option<u8>,
    pub stats: StatLine,
    pub reference: ReferenceTotals,
}

/// A scored player-season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub player: String,
    pub year: Season,
    pub team: String,
    pub position: Position,
    pub age: Option<u8>,
    pub games: Option<u8>,
    pub stats: StatLine,
    pub scheme: ScoringScheme,
    pub fantasy_points: f64,
}

/// One ADP snapshot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPositionRecord {
    pub name: String,
    pub year: Season,
    pub team: String,
    pub position: Position,
    pub position_rank: Option<u32>,
    pub adp_ppr: f64,
}

/// Which side of the join produced a merged row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Matched,
    PerformanceOnly,
    DraftOnly,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provenance::Matched => "matched",
            Provenance::PerformanceOnly => "performance_only",
            Provenance::DraftOnly => "draft_only",
        };
        write!(f, "{}", s)
    }
}

/// One-hot encoding of the four standard positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionIndicators {
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
}

impl From<Position> for PositionIndicators {
    fn from(position: Position) -> Self {
        let mut flags = Self::default();
        match position {
            Position::QB => flags.qb = 1,
            Position::RB => flags.rb = 1,
            Position::WR => flags.wr = 1,
            Position::TE => flags.te = 1,
        }
        flags
    }
}

/// A row of the joined performance / draft-position table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub player: String,
    pub year: Season,
    pub previous_year: Season,
    pub position: Position,
    pub team: String,
    pub provenance: Provenance,
    pub indicators: PositionIndicators,
    pub performance: Option<PerformanceRecord>,
    pub draft: Option<DraftPositionRecord>,
}

/// Flat row layout for CSV export.
#[derive(Debug, Serialize)]
pub struct MergedCsvRow<'a> {
    pub player: &'a str,
    pub year: u16,
    pub previous_year: u16,
    pub position: &'static str,
    pub team: &'a str,
    pub provenance: String,
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
    pub fantasy_points: Option<f64>,
    pub games: Option<u8>,
    pub age: Option<u8>,
    pub position_rank: Option<u32>,
    pub adp_ppr: Option<f64>,
}

impl<'a> From<&'a MergedRecord> for MergedCsvRow<'a> {
    fn from(record: &'a MergedRecord) -> Self {
        let performance = record.performance.as_ref();
        let draft = record.draft.as_ref();
        Self {
            player: &record.player,
            year: record.year.as_u16(),
            previous_year: record.previous_year.as_u16(),
            position: record.position.as_str(),
            team: &record.team,
            provenance: record.provenance.to_string(),
            qb: record.indicators.qb,
            rb: record.indicators.rb,
            wr: record.indicators.wr,
            te: record.indicators.te,
            fantasy_points: performance.map(|p| p.fantasy_points),
            games: performance.and_then(|p| p.games),
            age: performance.and_then(|p| p.age),
            position_rank: draft.and_then(|d| d.position_rank),
            adp_ppr: draft.map(|d| d.adp_ppr),
        }
    }
}
