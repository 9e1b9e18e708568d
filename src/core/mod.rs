//! Core utilities shared across the pipeline
//!
//! - `cache`: snapshot directory resolution and file system helpers

pub mod cache;

pub use cache::{default_snapshot_dir, ensure_parent_dir};
