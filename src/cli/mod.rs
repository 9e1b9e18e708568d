//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{ScoringScheme, Season, DRAFT_START_YEAR, PERFORMANCE_START_YEAR};

use crate::reconcile::DEFAULT_SPAN_THRESHOLD;

#[derive(Debug, Subcommand)]
pub enum ImportCmd {
    /// Import season performance from pro-football-reference.
    ///
    /// Fetches `/years/{year}/fantasy.htm` for every year in the range,
    /// normalizes and reconciles the rows, and saves the performance snapshot.
    Points {
        /// First season (inclusive).
        #[clap(long, default_value_t = Season::new(PERFORMANCE_START_YEAR))]
        start: Season,

        /// Last season (exclusive). Defaults to the current year.
        #[clap(long)]
        end: Option<Season>,

        /// Snapshot directory (or set `FFL_HISTORY_SNAPSHOT_DIR` env var).
        #[clap(long)]
        snapshot_dir: Option<PathBuf>,
    },

    /// Import average draft position from `ppr-adp-{year}.csv` exports.
    Adp {
        /// Directory holding the CSV exports (or set `FFL_HISTORY_ADP_DIR` env var).
        #[clap(long, short)]
        dir: Option<PathBuf>,

        /// First season (inclusive).
        #[clap(long, default_value_t = Season::new(DRAFT_START_YEAR))]
        start: Season,

        /// Last season (exclusive). Defaults to the current year.
        #[clap(long)]
        end: Option<Season>,

        /// Team codes spanning fewer years than this are flagged.
        #[clap(long, default_value_t = DEFAULT_SPAN_THRESHOLD)]
        span_threshold: u16,

        /// Save the snapshot even when team codes fail the span check.
        #[clap(long)]
        allow_span_violations: bool,

        /// Snapshot directory (or set `FFL_HISTORY_SNAPSHOT_DIR` env var).
        #[clap(long)]
        snapshot_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-history",
    about = "Historical fantasy football performance and draft position"
)]
pub struct FflHistory {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a source and save its snapshot
    Import {
        #[clap(subcommand)]
        cmd: ImportCmd,
    },

    /// Score the performance snapshot and join it with draft position.
    Merge {
        /// Scoring scheme: ppr, half or standard.
        #[clap(long, default_value_t = ScoringScheme::default())]
        scheme: ScoringScheme,

        /// Also write the merged table as CSV to this path.
        #[clap(long)]
        csv: Option<PathBuf>,

        /// Print the merge report as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Snapshot directory (or set `FFL_HISTORY_SNAPSHOT_DIR` env var).
        #[clap(long)]
        snapshot_dir: Option<PathBuf>,
    },
}
