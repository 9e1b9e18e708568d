//! Season years and half-open year ranges.

use crate::error::{HistoryError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season of the pro-football-reference fantasy tables we import.
pub const PERFORMANCE_START_YEAR: u16 = 2013;

/// First season with an ADP export.
pub const DRAFT_START_YEAR: u16 = 2014;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The calendar year on the local clock.
    pub fn current() -> Self {
        Self(chrono::Local::now().year() as u16)
    }

    pub fn previous(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Half-open range of seasons, `start..end`.
///
/// The end is exclusive so the default range stops at the last completed
/// season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Season,
    pub end: Season,
}

impl YearRange {
    pub fn new(start: Season, end: Season) -> Result<Self> {
        if start >= end {
            return Err(HistoryError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// From `start` up to (not including) the current year.
    pub fn through_current(start: Season) -> Result<Self> {
        Self::new(start, Season::current())
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.start.0..self.end.0).map(Season)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
