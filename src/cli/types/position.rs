//! Fantasy football position types and utilities.

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four standard fantasy-relevant positions.
///
/// Both data sources carry other labels (kickers, defenses, fullbacks, blank
/// cells for non-skill players); those never parse into a `Position`, which is
/// how records outside the fantasy pool get filtered out.
///
/// # Examples
///
/// ```rust
/// use ffl_history::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// assert!("K".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(HistoryError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
    }

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("wr".parse::<Position>().unwrap(), Position::WR);
        assert_eq!(" Te ".parse::<Position>().unwrap(), Position::TE);
    }

    #[test]
    fn test_non_fantasy_positions_rejected() {
        for label in ["K", "DST", "FB", ""] {
            match label.parse::<Position>() {
                Err(HistoryError::InvalidPosition { position }) => assert_eq!(position, label),
                other => panic!("Expected InvalidPosition for {label:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_position_serde_uses_labels() {
        let json = serde_json::to_string(&Position::RB).unwrap();
        assert_eq!(json, "\"RB\"");
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::RB);
    }
}
