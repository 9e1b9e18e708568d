//! Outer join of scored performance with draft position.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

use crate::{
    cli::types::{Position, Season},
    reconcile::{Condition, Correction, ReconcileReport, Reconciler, Rule},
    storage::models::{
        DraftPositionRecord, MergedRecord, PerformanceRecord, PositionIndicators, Provenance,
    },
};


/// Identity fixes that only matter when joining: spellings both sources use
/// consistently within themselves, and seasons where the two sources filed a
/// player under different positions.
pub static MERGE_RULES: &[Rule] = &[
    Rule::new(
        "will-fuller-v",
        Condition::NameIs("Will Fuller V"),
        Correction::Rename("Will Fuller"),
    ),
    Rule::new(
        "chris-herndon",
        Condition::NameIs("Chris Herndon IV"),
        Correction::Rename("Chris Herndon"),
    ),
    Rule::new(
        "ty-montgomery-2016",
        Condition::PlayerSeason { name: "Ty Montgomery", year: 2016 },
        Correction::SetPosition(Position::RB),
    ),
    Rule::new(
        "cordarrelle-patterson-2021",
        Condition::PlayerSeason { name: "Cordarrelle Patterson", year: 2021 },
        Correction::SetPosition(Position::RB),
    ),
];

/// Natural join key: (player, year, position).
pub type JoinKey = (String, Season, Position);

fn key_of(name: &str, year: Season, position: Position) -> JoinKey {
    (name.to_string(), year, position)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvenanceCounts {
    pub matched: usize,
    pub performance_only: usize,
    pub draft_only: usize,
}

impl ProvenanceCounts {
    fn record(&mut self, provenance: Provenance) {
        match provenance {
            Provenance::Matched => self.matched += 1,
            Provenance::PerformanceOnly => self.performance_only += 1,
            Provenance::DraftOnly => self.draft_only += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.performance_only + self.draft_only
    }
}

/// A player-season present on both sides under different positions, so it
/// could not join. Left for manual resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionConflict {
    pub player: String,
    pub year: Season,
    pub performance_position: Position,
    pub draft_position: Position,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct MergeReport {
    pub by_year: BTreeMap<Season, ProvenanceCounts>,
    pub conflicts: Vec<PositionConflict>,
    pub corrections: ReconcileReport,
}

impl MergeReport {
    pub fn totals(&self) -> ProvenanceCounts {
        self.by_year
            .values()
            .fold(ProvenanceCounts::default(), |acc, c| ProvenanceCounts {
                matched: acc.matched + c.matched,
                performance_only: acc.performance_only + c.performance_only,
                draft_only: acc.draft_only + c.draft_only,
            })
    }
}

fn merged_row(
    provenance: Provenance,
    performance: Option<PerformanceRecord>,
    draft: Option<DraftPositionRecord>,
) -> Option<MergedRecord> {
    let (player, year, position, team) = match (&performance, &draft) {
        (Some(p), _) => (p.player.clone(), p.year, p.position, p.team.clone()),
        (None, Some(d)) => (d.name.clone(), d.year, d.position, d.team.clone()),
        (None, None) => return None,
    };
    Some(MergedRecord {
        player,
        year,
        previous_year: year.previous(),
        position,
        team,
        provenance,
        indicators: PositionIndicators::from(position),
        performance,
        draft,
    })
}

fn find_conflicts(rows: &[MergedRecord]) -> Vec<PositionConflict> {
    let mut performance_only: HashMap<(&str, Season), Vec<Position>> = HashMap::new();
    for row in rows
        .iter()
        .filter(|r| r.provenance == Provenance::PerformanceOnly)
    {
        performance_only
            .entry((row.player.as_str(), row.year))
            .or_default()
            .push(row.position);
    }

    let mut conflicts = Vec::new();
    for row in rows.iter().filter(|r| r.provenance == Provenance::DraftOnly) {
        let Some(positions) = performance_only.get(&(row.player.as_str(), row.year)) else {
            continue;
        };
        for &performance_position in positions {
            if performance_position != row.position {
                conflicts.push(PositionConflict {
                    player: row.player.clone(),
                    year: row.year,
                    performance_position,
                    draft_position: row.position,
                });
            }
        }
    }
    conflicts
}

/// Outer join on (player, year, position), using [`MERGE_RULES`] for the
/// pre-join corrections.
pub fn merge(
    performance: Vec<PerformanceRecord>,
    draft: Vec<DraftPositionRecord>,
) -> (Vec<MergedRecord>, MergeReport) {
    merge_with(&Reconciler::new(MERGE_RULES.to_vec()), performance, draft)
}

/// Outer join after applying `corrections` to both sides.
///
/// Rows come out in performance order, then the unmatched draft rows in draft
/// order. A key present more than once pairs every combination.
pub fn merge_with(
    corrections: &Reconciler,
    mut performance: Vec<PerformanceRecord>,
    mut draft: Vec<DraftPositionRecord>,
) -> (Vec<MergedRecord>, MergeReport) {
    let mut report = MergeReport {
        corrections: corrections.reconcile(&mut performance),
        ..MergeReport::default()
    };
    report
        .corrections
        .absorb(corrections.reconcile(&mut draft));

    let mut draft_index: HashMap<JoinKey, Vec<usize>> = HashMap::new();
    for (i, d) in draft.iter().enumerate() {
        draft_index
            .entry(key_of(&d.name, d.year, d.position))
            .or_default()
            .push(i);
    }
    for ((name, year, position), idxs) in &draft_index {
        if idxs.len() > 1 {
            warn!("{} draft rows share key {name} / {year} / {position}", idxs.len());
        }
    }

    let mut used = vec![false; draft.len()];
    let mut rows = Vec::with_capacity(performance.len() + draft.len());

    for p in performance {
        let key = key_of(&p.player, p.year, p.position);
        match draft_index.get(&key) {
            Some(idxs) => {
                for &i in idxs {
                    used[i] = true;
                    rows.extend(merged_row(
                        Provenance::Matched,
                        Some(p.clone()),
                        Some(draft[i].clone()),
                    ));
                }
            }
            None => rows.extend(merged_row(Provenance::PerformanceOnly, Some(p), None)),
        }
    }

    for (d, joined) in draft.into_iter().zip(used) {
        if !joined {
            rows.extend(merged_row(Provenance::DraftOnly, None, Some(d)));
        }
    }

    for row in &rows {
        report
            .by_year
            .entry(row.year)
            .or_default()
            .record(row.provenance);
    }
    report.conflicts = find_conflicts(&rows);

    let totals = report.totals();
    info!(
        "Merged {} rows: {} matched, {} performance only, {} draft only, {} position conflicts",
        rows.len(),
        totals.matched,
        totals.performance_only,
        totals.draft_only,
        report.conflicts.len()
    );

    (rows, report)
}
