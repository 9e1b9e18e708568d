//! Fantasy point computation and reference-total verification.

use tracing::{debug, info};

use crate::{
    cli::types::{ScoringScheme, Season},
    error::{HistoryError, Result},
    storage::models::{PerformanceRecord, ReferenceTotals, StatLine, StatRow},
};


/// Largest allowed gap between a computed total and the source's own total.
pub const REFERENCE_TOLERANCE: f64 = 0.1;

/// Points per unit for every scored category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub pass_yds: f64,
    pub pass_td: f64,
    pub pass_int: f64,
    pub rush_yds: f64,
    pub rush_td: f64,
    pub reception: f64,
    pub rec_yds: f64,
    pub rec_td: f64,
    pub fumble_lost: f64,
    pub two_pt: f64,
}

impl ScoringWeights {
    pub fn for_scheme(scheme: ScoringScheme) -> Self {
        Self {
            pass_yds: 0.04,
            pass_td: 4.0,
            pass_int: -2.0,
            rush_yds: 0.1,
            rush_td: 6.0,
            reception: scheme.points_per_reception(),
            rec_yds: 0.1,
            rec_td: 6.0,
            fumble_lost: -2.0,
            two_pt: 2.0,
        }
    }

    /// Weighted sum over the stat line; missing categories count as zero.
    pub fn score(&self, stats: &StatLine) -> f64 {
        let v = |x: Option<f64>| x.unwrap_or(0.0);

        v(stats.pass_yds) * self.pass_yds
            + v(stats.pass_td) * self.pass_td
            + v(stats.pass_int) * self.pass_int
            + v(stats.rush_yds) * self.rush_yds
            + v(stats.rush_td) * self.rush_td
            + v(stats.receptions) * self.reception
            + v(stats.rec_yds) * self.rec_yds
            + v(stats.rec_td) * self.rec_td
            + v(stats.fumbles_lost) * self.fumble_lost
            + (v(stats.two_pt_made) + v(stats.two_pt_passed)) * self.two_pt
    }
}

/// The source total computed under the same convention as `scheme`, if any.
///
/// Only the PPR column carries tenths. The standard column is published as a
/// whole number, so it cannot be held to the tolerance and is not compared.
pub fn reference_for(scheme: ScoringScheme, reference: &ReferenceTotals) -> Option<f64> {
    match scheme {
        ScoringScheme::Ppr => reference.ppr,
        ScoringScheme::Standard | ScoringScheme::HalfPpr => None,
    }
}

/// Fail when `computed` strays from the reference by more than the tolerance.
pub fn verify_reference(
    player: &str,
    year: Season,
    computed: f64,
    reference: Option<f64>,
) -> Result<()> {
    match reference {
        Some(reference) if (computed - reference).abs() > REFERENCE_TOLERANCE => {
            Err(HistoryError::ScoreMismatch {
                player: player.to_string(),
                year,
                computed,
                reference,
            })
        }
        _ => Ok(()),
    }
}

/// Score every row under `scheme`, verifying against the source totals where
/// the conventions agree, then drop rows that have no position.
pub fn score_rows(rows: Vec<StatRow>, scheme: ScoringScheme) -> Result<Vec<PerformanceRecord>> {
    let weights = ScoringWeights::for_scheme(scheme);
    let total = rows.len();
    let mut checked = 0usize;
    let mut scored = Vec::with_capacity(total);

    for row in rows {
        let points = weights.score(&row.stats);
        let reference = reference_for(scheme, &row.reference);
        verify_reference(&row.player, row.year, points, reference)?;
        if reference.is_some() {
            checked += 1;
        }

        let Some(position) = row.position else {
            continue;
        };
        scored.push(PerformanceRecord {
            player: row.player,
            year: row.year,
            team: row.team,
            position,
            age: row.age,
            games: row.games,
            stats: row.stats,
            scheme,
            fantasy_points: points,
        });
    }

    debug!("{checked} of {total} rows verified against source totals");
    info!(
        "Scored {} rows under {scheme}; dropped {} without a position",
        scored.len(),
        total - scored.len()
    );
    Ok(scored)
}
