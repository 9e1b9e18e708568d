//! Type-safe wrappers and enums shared across the pipeline.

pub mod position;
pub mod scheme;
pub mod time;

pub use position::Position;
pub use scheme::ScoringScheme;
pub use time::{Season, YearRange, DRAFT_START_YEAR, PERFORMANCE_START_YEAR};
