//! Storage layer for the fantasy history pipeline
//!
//! - `models`: record types flowing between pipeline stages
//! - `snapshot`: JSON snapshot store and CSV export

pub mod models;
pub mod snapshot;


pub use models::*;
pub use snapshot::{
    export_csv, SnapshotStore, DRAFT_POSITION_SNAPSHOT, MERGED_SNAPSHOT, PERFORMANCE_SNAPSHOT,
};
