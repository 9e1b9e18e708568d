//! Error types for the fantasy history pipeline

use crate::cli::types::Season;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTML parsing failed: {message}")]
    Html { message: String },

    #[error("Schema drift in {year}: expected {expected} columns, found {found}")]
    SchemaDrift {
        year: Season,
        expected: usize,
        found: usize,
    },

    #[error("Column mismatch in {year}: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        year: Season,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Column {column:?} missing from {year} source")]
    MissingColumn { year: Season, column: String },

    #[error(
        "Score mismatch for {player} ({year}): computed {computed:.2}, reference {reference:.2}"
    )]
    ScoreMismatch {
        player: String,
        year: Season,
        computed: f64,
        reference: f64,
    },

    #[error("Team span check failed for: {}", teams.join(", "))]
    TeamSpanViolation { teams: Vec<String> },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid scoring scheme: {scheme} (expected ppr, half or standard)")]
    InvalidScheme { scheme: String },

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Invalid year range: {start}..{end}")]
    InvalidYearRange { start: Season, end: Season },

    #[error("Snapshot {name:?} not found at {path}")]
    SnapshotMissing { name: String, path: String },

    #[error("ADP directory not provided. Pass --dir or set {env_var}.")]
    MissingAdpDir { env_var: String },

    #[error("No data fetched for any year")]
    NoData,
}
