//! Scoring scheme selector.

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three supported scoring conventions. They differ only in the value of
/// a reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    /// One point per reception.
    #[default]
    Ppr,
    /// Half a point per reception.
    HalfPpr,
    /// No points for receptions.
    Standard,
}

impl ScoringScheme {
    pub fn points_per_reception(&self) -> f64 {
        match self {
            ScoringScheme::Ppr => 1.0,
            ScoringScheme::HalfPpr => 0.5,
            ScoringScheme::Standard => 0.0,
        }
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringScheme::Ppr => "ppr",
            ScoringScheme::HalfPpr => "half",
            ScoringScheme::Standard => "standard",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ScoringScheme {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ppr" | "full" => Ok(ScoringScheme::Ppr),
            "half" | "half-ppr" | "half_ppr" => Ok(ScoringScheme::HalfPpr),
            "standard" | "std" | "non-ppr" => Ok(ScoringScheme::Standard),
            _ => Err(HistoryError::InvalidScheme {
                scheme: s.to_string(),
            }),
        }
    }
}
