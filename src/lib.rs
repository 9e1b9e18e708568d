//! Fantasy Football History Library
//!
//! Builds a season-by-season history of NFL fantasy performance joined with
//! average draft position, ready for a draft-value regression.
//!
//! ## Pipeline
//!
//! - **Sources**: yearly tables from pro-football-reference and ADP CSV exports
//! - **Normalization**: fixed reference schemas, filler-row removal, typed rows
//! - **Reconciliation**: ordered, declarative name/team/position corrections
//! - **Scoring**: PPR, half-PPR or standard points, checked against source totals
//! - **Merge**: outer join on (player, year, position) with provenance tags
//! - **Snapshots**: JSON files between stages, CSV export of the merged table
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_history::{merge::merge, scoring::score_rows, storage::*, ScoringScheme};
//!
//! # fn example() -> ffl_history::Result<()> {
//! let store = SnapshotStore::new("/tmp/ffl-history");
//! let stats: Vec<StatRow> = store.load(PERFORMANCE_SNAPSHOT)?;
//! let draft: Vec<DraftPositionRecord> = store.load(DRAFT_POSITION_SNAPSHOT)?;
//!
//! let performance = score_rows(stats, ScoringScheme::Ppr)?;
//! let (rows, report) = merge(performance, draft);
//! println!("{} rows, {} matched", rows.len(), report.totals().matched);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_HISTORY_SNAPSHOT_DIR=~/data/ffl-history
//! export FFL_HISTORY_ADP_DIR=~/data/adp
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod reconcile;
pub mod scoring;
pub mod sources;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Position, ScoringScheme, Season, YearRange};
pub use error::{HistoryError, Result};

pub const SNAPSHOT_DIR_ENV_VAR: &str = "FFL_HISTORY_SNAPSHOT_DIR";
pub const ADP_DIR_ENV_VAR: &str = "FFL_HISTORY_ADP_DIR";
