//! Name, team and position reconciliation across both datasets
//!
//! - `rules`: the declarative rule types and the curated rule table
//! - `teams`: team-code year-span validation

pub mod rules;
pub mod teams;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cli::types::{Position, Season},
    storage::models::{DraftPositionRecord, PerformanceRecord, StatRow},
};

pub use rules::{Condition, Correction, Rule, ADP_TO_PFR_TEAMS, CANONICAL_RULES};
pub use teams::{check_team_spans, team_spans, TeamSpan, DEFAULT_SPAN_THRESHOLD, KNOWN_RELOCATED};

/// The identity fields that correction rules read and rewrite.
pub trait PlayerIdentity {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn team(&self) -> &str;
    fn set_team(&mut self, team: String);
    fn position(&self) -> Option<Position>;
    fn set_position(&mut self, position: Position);
    fn year(&self) -> Season;
}

impl PlayerIdentity for StatRow {
    fn name(&self) -> &str {
        &self.player
    }
    fn set_name(&mut self, name: String) {
        self.player = name;
    }
    fn team(&self) -> &str {
        &self.team
    }
    fn set_team(&mut self, team: String) {
        self.team = team;
    }
    fn position(&self) -> Option<Position> {
        self.position
    }
    fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
    fn year(&self) -> Season {
        self.year
    }
}

impl PlayerIdentity for PerformanceRecord {
    fn name(&self) -> &str {
        &self.player
    }
    fn set_name(&mut self, name: String) {
        self.player = name;
    }
    fn team(&self) -> &str {
        &self.team
    }
    fn set_team(&mut self, team: String) {
        self.team = team;
    }
    fn position(&self) -> Option<Position> {
        Some(self.position)
    }
    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
    fn year(&self) -> Season {
        self.year
    }
}

impl PlayerIdentity for DraftPositionRecord {
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
    fn team(&self) -> &str {
        &self.team
    }
    fn set_team(&mut self, team: String) {
        self.team = team;
    }
    fn position(&self) -> Option<Position> {
        Some(self.position)
    }
    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
    fn year(&self) -> Season {
        self.year
    }
}

/// Records whose identity differs after the full rule pass, and which rules
/// fired on them. A record that later rules put back to its starting identity
/// is not counted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub records_changed: usize,
    pub changes: BTreeMap<&'static str, usize>,
}

impl ReconcileReport {
    /// Rule firings over the changed records.
    pub fn total(&self) -> usize {
        self.changes.values().sum()
    }

    /// Fold another report into this one.
    pub fn absorb(&mut self, other: ReconcileReport) {
        self.records_changed += other.records_changed;
        for (label, count) in other.changes {
            *self.changes.entry(label).or_default() += count;
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.changes.get(label).copied().unwrap_or(0)
    }
}

fn identity<R: PlayerIdentity + ?Sized>(record: &R) -> (String, String, Option<Position>) {
    (
        record.name().to_string(),
        record.team().to_string(),
        record.position(),
    )
}

/// An ordered list of rules applied record by record.
#[derive(Debug, Clone)]
pub struct Reconciler {
    rules: Vec<Rule>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(CANONICAL_RULES.to_vec())
    }
}

impl Reconciler {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Run every rule, in order, against one record.
    pub fn apply_one<R: PlayerIdentity + ?Sized>(
        &self,
        record: &mut R,
        report: &mut ReconcileReport,
    ) {
        let before = identity(&*record);
        let fired: Vec<&'static str> = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(&mut *record).then_some(rule.label))
            .collect();

        if identity(&*record) == before {
            return;
        }
        report.records_changed += 1;
        for label in fired {
            *report.changes.entry(label).or_default() += 1;
        }
    }

    pub fn reconcile<R: PlayerIdentity>(&self, records: &mut [R]) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        for record in records.iter_mut() {
            self.apply_one(record, &mut report);
        }
        for (label, count) in &report.changes {
            debug!("rule {label}: fired on {count} changed records");
        }
        debug!("{} of {} records changed", report.records_changed, records.len());
        report
    }
}
