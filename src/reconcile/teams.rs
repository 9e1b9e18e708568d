//! Team-code year-span validation.
//!
//! After reconciliation every franchise should keep one code across the whole
//! import window. A code that only covers a few seasons usually means an
//! abbreviation slipped through unmapped; the relocated franchises are the
//! expected exceptions.

use std::collections::{BTreeMap, BTreeSet};

use super::PlayerIdentity;
use crate::cli::types::Season;

/// Codes that legitimately cover only part of the window.
pub const KNOWN_RELOCATED: [&str; 6] = ["LAC", "LAR", "LVR", "OAK", "SDG", "STL"];

pub const DEFAULT_SPAN_THRESHOLD: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpan {
    pub team: String,
    pub first: Season,
    pub last: Season,
}

impl TeamSpan {
    pub fn span(&self) -> u16 {
        self.last.as_u16() - self.first.as_u16()
    }
}

/// First and last season of each team code, sorted by code. Blank codes are
/// ignored.
pub fn team_spans<R: PlayerIdentity>(records: &[R]) -> Vec<TeamSpan> {
    let pairs: BTreeSet<(&str, Season)> = records
        .iter()
        .filter(|r| !r.team().is_empty())
        .map(|r| (r.team(), r.year()))
        .collect();

    let mut spans: BTreeMap<&str, (Season, Season)> = BTreeMap::new();
    for (team, year) in pairs {
        spans
            .entry(team)
            .and_modify(|(first, last)| {
                *first = (*first).min(year);
                *last = (*last).max(year);
            })
            .or_insert((year, year));
    }

    spans
        .into_iter()
        .map(|(team, (first, last))| TeamSpan {
            team: team.to_string(),
            first,
            last,
        })
        .collect()
}

/// Team codes whose span is under `threshold` years and which are not known
/// relocations. Reported only; nothing is rewritten.
///
/// The check flags *short* spans: a code seen for fewer than `threshold`
/// seasons (last minus first) is an unmapped abbreviation, while a code that
/// covers the whole history passes.
pub fn check_team_spans<R: PlayerIdentity>(records: &[R], threshold: u16) -> Vec<TeamSpan> {
    team_spans(records)
        .into_iter()
        .filter(|s| s.span() < threshold && !KNOWN_RELOCATED.contains(&s.team.as_str()))
        .collect()
}
