//! Command implementations for the history pipeline

pub mod common;
pub mod import_adp;
pub mod import_points;
pub mod merge;
