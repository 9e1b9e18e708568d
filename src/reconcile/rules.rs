//! Declarative correction rules and the curated rule table.

use super::PlayerIdentity;
use crate::cli::types::{Position, Season};

/// When a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    NameIs(&'static str),
    NameContains(&'static str),
    /// One player in one season.
    PlayerSeason { name: &'static str, year: u16 },
    /// A team code in any season up to and including `last_year`.
    TeamThrough { team: &'static str, last_year: u16 },
}

impl Condition {
    pub fn matches<R: PlayerIdentity + ?Sized>(&self, record: &R) -> bool {
        match *self {
            Condition::Always => true,
            Condition::NameIs(name) => record.name() == name,
            Condition::NameContains(fragment) => record.name().contains(fragment),
            Condition::PlayerSeason { name, year } => {
                record.name() == name && record.year() == Season::new(year)
            }
            Condition::TeamThrough { team, last_year } => {
                record.team() == team && record.year() <= Season::new(last_year)
            }
        }
    }
}

/// What a rule does to a matching record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Remove trailing `I` characters and spaces (II, III, ...).
    StripRomanSuffix,
    /// Replace every occurrence of `from` in the name.
    ReplaceInName {
        from: &'static str,
        to: &'static str,
    },
    Rename(&'static str),
    SetPosition(Position),
    /// Translate team codes through a lookup table; unknown codes are kept.
    TeamCodes(&'static [(&'static str, &'static str)]),
    SetTeam(&'static str),
}

impl Correction {
    /// Apply to `record`, returning whether anything changed.
    pub fn apply<R: PlayerIdentity + ?Sized>(&self, record: &mut R) -> bool {
        match *self {
            Correction::StripRomanSuffix => {
                let stripped = record.name().trim_end_matches(['I', ' ']);
                if stripped.len() == record.name().len() {
                    return false;
                }
                let stripped = stripped.to_string();
                record.set_name(stripped);
                true
            }
            Correction::ReplaceInName { from, to } => {
                if !record.name().contains(from) {
                    return false;
                }
                let replaced = record.name().replace(from, to);
                set_name_if_changed(record, replaced)
            }
            Correction::Rename(name) => set_name_if_changed(record, name.to_string()),
            Correction::SetPosition(position) => {
                if record.position() == Some(position) {
                    return false;
                }
                record.set_position(position);
                true
            }
            Correction::TeamCodes(table) => {
                let Some((_, mapped)) = table.iter().find(|(from, _)| *from == record.team())
                else {
                    return false;
                };
                set_team_if_changed(record, mapped)
            }
            Correction::SetTeam(team) => set_team_if_changed(record, team),
        }
    }
}

fn set_name_if_changed<R: PlayerIdentity + ?Sized>(record: &mut R, name: String) -> bool {
    if record.name() == name {
        return false;
    }
    record.set_name(name);
    true
}

fn set_team_if_changed<R: PlayerIdentity + ?Sized>(record: &mut R, team: &str) -> bool {
    if record.team() == team {
        return false;
    }
    record.set_team(team.to_string());
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub label: &'static str,
    pub when: Condition,
    pub then: Correction,
}

impl Rule {
    pub const fn new(label: &'static str, when: Condition, then: Correction) -> Self {
        Self { label, when, then }
    }

    pub fn apply<R: PlayerIdentity + ?Sized>(&self, record: &mut R) -> bool {
        self.when.matches(record) && self.then.apply(record)
    }
}

/// ADP feed team codes that differ from pro-football-reference codes.
pub const ADP_TO_PFR_TEAMS: &[(&str, &str)] = &[
    ("GB", "GNB"),
    ("KC", "KAN"),
    ("LV", "LVR"),
    ("NO", "NOR"),
    ("NE", "NWE"),
    ("SF", "SFO"),
    ("TB", "TAM"),
];

/// Curated identity corrections, in application order. Later rules rely on
/// earlier ones: the `Chark` rename undoes the `DJ ` initials rule, and the
/// suffix renames restore what `strip-roman-suffix` removed.
pub static CANONICAL_RULES: &[Rule] = &[
    Rule::new("strip-roman-suffix", Condition::Always, Correction::StripRomanSuffix),
    Rule::new(
        "initials-cj",
        Condition::Always,
        Correction::ReplaceInName { from: "CJ ", to: "C.J. " },
    ),
    Rule::new(
        "initials-dj",
        Condition::Always,
        Correction::ReplaceInName { from: "DJ ", to: "D.J. " },
    ),
    Rule::new(
        "initials-dk",
        Condition::Always,
        Correction::ReplaceInName { from: "DK ", to: "D.K. " },
    ),
    Rule::new(
        "steve-smith-sr",
        Condition::NameIs("Steve Smith"),
        Correction::Rename("Steve Smith Sr."),
    ),
    Rule::new(
        "marvin-jones",
        Condition::Always,
        Correction::ReplaceInName { from: "Marvin Jones Jr.", to: "Marvin Jones" },
    ),
    Rule::new(
        "darrell-henderson",
        Condition::Always,
        Correction::ReplaceInName { from: "Darrell Henderson Jr.", to: "Darrell Henderson" },
    ),
    Rule::new(
        "gabriel-davis",
        Condition::Always,
        Correction::ReplaceInName { from: "Gabe Davis", to: "Gabriel Davis" },
    ),
    Rule::new("team-codes", Condition::Always, Correction::TeamCodes(ADP_TO_PFR_TEAMS)),
    Rule::new(
        "raiders-oakland",
        Condition::TeamThrough { team: "LVR", last_year: 2019 },
        Correction::SetTeam("OAK"),
    ),
    Rule::new(
        "chargers-san-diego",
        Condition::TeamThrough { team: "LAC", last_year: 2016 },
        Correction::SetTeam("SDG"),
    ),
    Rule::new(
        "rams-st-louis",
        Condition::TeamThrough { team: "LAR", last_year: 2015 },
        Correction::SetTeam("STL"),
    ),
    Rule::new(
        "jordan-matthews-wr",
        Condition::NameContains("Jordan Matthews"),
        Correction::SetPosition(Position::WR),
    ),
    Rule::new(
        "funchess-wr",
        Condition::NameContains("Funchess"),
        Correction::SetPosition(Position::WR),
    ),
    Rule::new(
        "mitchell-trubisky",
        Condition::NameContains("Trubisky"),
        Correction::Rename("Mitchell Trubisky"),
    ),
    Rule::new(
        "gardner-minshew",
        Condition::NameContains("Minshew"),
        Correction::Rename("Gardner Minshew II"),
    ),
    Rule::new("dj-chark", Condition::NameContains("Chark"), Correction::Rename("DJ Chark")),
    Rule::new(
        "robert-griffin",
        Condition::NameContains("Robert Griffin"),
        Correction::Rename("Robert Griffin III"),
    ),
    Rule::new(
        "willie-snead",
        Condition::NameContains("Willie Snead"),
        Correction::Rename("Willie Snead"),
    ),
    Rule::new(
        "will-fuller",
        Condition::NameContains("William Fuller"),
        Correction::Rename("Will Fuller"),
    ),
    Rule::new(
        "ronald-jones",
        Condition::NameContains("Ronald Jones"),
        Correction::Rename("Ronald Jones II"),
    ),
    Rule::new(
        "ben-watson",
        Condition::NameContains("Benjamin Watson"),
        Correction::Rename("Ben Watson"),
    ),
    Rule::new(
        "robert-kelley",
        Condition::NameContains("Rob Kelley"),
        Correction::Rename("Robert Kelley"),
    ),
    Rule::new(
        "henry-ruggs",
        Condition::NameContains("Henry Ruggs"),
        Correction::Rename("Henry Ruggs III"),
    ),
    Rule::new(
        "kenneth-walker",
        Condition::NameContains("Kenneth Walker"),
        Correction::Rename("Kenneth Walker III"),
    ),
];
