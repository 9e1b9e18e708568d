//! Unit tests for identity reconciliation

use super::*;
use crate::storage::models::{ReferenceTotals, StatLine};

fn draft(name: &str, team: &str, position: Position, year: u16) -> DraftPositionRecord {
    DraftPositionRecord {
        name: name.to_string(),
        year: Season::new(year),
        team: team.to_string(),
        position,
        position_rank: Some(1),
        adp_ppr: 50.0,
    }
}

fn stat_row(player: &str, team: &str, year: u16) -> StatRow {
    StatRow {
        player: player.to_string(),
        year: Season::new(year),
        team: team.to_string(),
        position: Some(Position::WR),
        age: None,
        games: None,
        stats: StatLine::default(),
        reference: ReferenceTotals::default(),
    }
}

fn reconcile_name(name: &str) -> String {
    let mut records = vec![draft(name, "NYG", Position::WR, 2019)];
    Reconciler::default().reconcile(&mut records);
    records.remove(0).name
}

#[test]
fn test_relocated_team_maps_to_historical_code() {
    let mut records = vec![
        draft("Derek Carr", "LVR", Position::QB, 2018),
        draft("Derek Carr", "LV", Position::QB, 2019),
        draft("Derek Carr", "LV", Position::QB, 2020),
    ];
    Reconciler::default().reconcile(&mut records);

    assert_eq!(records[0].team, "OAK");
    assert_eq!(records[1].team, "OAK");
    assert_eq!(records[2].team, "LVR");
}

#[test]
fn test_relocation_cutoffs() {
    let mut records = vec![
        draft("Philip Rivers", "LAC", Position::QB, 2016),
        draft("Philip Rivers", "LAC", Position::QB, 2017),
        draft("Todd Gurley", "LAR", Position::RB, 2015),
        draft("Todd Gurley", "LAR", Position::RB, 2016),
    ];
    Reconciler::default().reconcile(&mut records);

    let teams: Vec<&str> = records.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, vec!["SDG", "LAC", "STL", "LAR"]);
}

#[test]
fn test_adp_team_codes_translate() {
    let mut records = vec![
        draft("Aaron Rodgers", "GB", Position::QB, 2019),
        draft("Tom Brady", "NE", Position::QB, 2019),
        draft("Josh Allen", "BUF", Position::QB, 2019),
    ];
    Reconciler::default().reconcile(&mut records);

    assert_eq!(records[0].team, "GNB");
    assert_eq!(records[1].team, "NWE");
    assert_eq!(records[2].team, "BUF");
}

#[test]
fn test_performance_rows_are_reconciled_too() {
    let mut rows = vec![stat_row("Gabe Davis", "BUF", 2021)];
    let report = Reconciler::default().reconcile(&mut rows);

    assert_eq!(rows[0].player, "Gabriel Davis");
    assert_eq!(report.count("gabriel-davis"), 1);
    assert_eq!(report.total(), 1);
    assert_eq!(report.records_changed, 1);
}

#[test]
fn test_roman_suffix_stripped_unless_restored() {
    assert_eq!(reconcile_name("Mark Ingram II"), "Mark Ingram");
    assert_eq!(reconcile_name("Odell Beckham Jr."), "Odell Beckham Jr.");
    assert_eq!(reconcile_name("Robert Griffin III"), "Robert Griffin III");
    assert_eq!(reconcile_name("Gardner Minshew"), "Gardner Minshew II");
    assert_eq!(reconcile_name("Kenneth Walker"), "Kenneth Walker III");
}

#[test]
fn test_initials_normalized() {
    assert_eq!(reconcile_name("CJ Anderson"), "C.J. Anderson");
    assert_eq!(reconcile_name("DJ Moore"), "D.J. Moore");
    assert_eq!(reconcile_name("DK Metcalf"), "D.K. Metcalf");
}

#[test]
fn test_later_rules_see_earlier_results() {
    // initials-dj fires first, then the Chark rename restores the PFR spelling
    let mut records = vec![
        draft("DJ Chark", "JAX", Position::WR, 2019),
        draft("D.J. Chark", "JAX", Position::WR, 2020),
    ];
    let report = Reconciler::default().reconcile(&mut records);

    assert_eq!(records[0].name, "DJ Chark");
    assert_eq!(records[1].name, "DJ Chark");
    assert_eq!(report.records_changed, 1);
    assert_eq!(report.count("dj-chark"), 1);
    assert_eq!(report.count("initials-dj"), 0);
}

#[test]
fn test_rules_that_cancel_out_are_not_counted() {
    let mut records = vec![
        draft("Henry Ruggs III", "LVR", Position::WR, 2020),
        draft("Robert Griffin III", "BAL", Position::QB, 2019),
    ];
    let report = Reconciler::default().reconcile(&mut records);

    assert_eq!(records[0].name, "Henry Ruggs III");
    assert_eq!(records[1].name, "Robert Griffin III");
    assert_eq!(report.records_changed, 0);
    assert_eq!(report.total(), 0);
    assert_eq!(report.count("strip-roman-suffix"), 0);
}

#[test]
fn test_second_pass_reports_nothing() {
    let mut records = vec![
        draft("Gardner Minshew", "JAX", Position::QB, 2019),
        draft("Derek Carr", "LV", Position::QB, 2018),
        draft("Mark Ingram II", "BAL", Position::RB, 2019),
    ];
    let reconciler = Reconciler::default();

    let first = reconciler.reconcile(&mut records);
    assert_eq!(first.records_changed, 3);

    let second = reconciler.reconcile(&mut records);
    assert_eq!(second, ReconcileReport::default());
}

#[test]
fn test_one_off_corrections() {
    let cases = [
        ("Steve Smith", "Steve Smith Sr."),
        ("Marvin Jones Jr.", "Marvin Jones"),
        ("Darrell Henderson Jr.", "Darrell Henderson"),
        ("Mitch Trubisky", "Mitchell Trubisky"),
        ("Willie Snead IV", "Willie Snead"),
        ("William Fuller V", "Will Fuller"),
        ("Ronald Jones", "Ronald Jones II"),
        ("Benjamin Watson", "Ben Watson"),
        ("Rob Kelley", "Robert Kelley"),
        ("Henry Ruggs", "Henry Ruggs III"),
    ];
    for (raw, expected) in cases {
        assert_eq!(reconcile_name(raw), expected, "reconciling {raw:?}");
    }
}

#[test]
fn test_position_overrides() {
    let mut records = vec![
        draft("Jordan Matthews", "PHI", Position::TE, 2019),
        draft("Devin Funchess", "CAR", Position::TE, 2016),
    ];
    Reconciler::default().reconcile(&mut records);

    assert!(records.iter().all(|r| r.position == Position::WR));
}

#[test]
fn test_position_override_fills_missing_position() {
    let mut rows = vec![stat_row("Jordan Matthews", "SFO", 2020)];
    rows[0].position = None;
    Reconciler::default().reconcile(&mut rows);
    assert_eq!(rows[0].position, Some(Position::WR));
}

#[test]
fn test_reconcile_is_idempotent() {
    let mut records: Vec<DraftPositionRecord> = [
        ("Steve Smith", "BAL", 2014),
        ("DJ Chark", "JAX", 2019),
        ("Gardner Minshew II", "JAX", 2019),
        ("Robert Griffin III", "WAS", 2014),
        ("CJ Anderson", "DEN", 2015),
        ("Gabe Davis", "BUF", 2021),
        ("Derek Carr", "LV", 2018),
        ("Keenan Allen", "LAC", 2015),
        ("Rob Kelley", "WAS", 2017),
    ]
    .into_iter()
    .map(|(n, t, y)| draft(n, t, Position::WR, y))
    .collect();

    let reconciler = Reconciler::default();
    reconciler.reconcile(&mut records);
    let once = records.clone();
    reconciler.reconcile(&mut records);

    assert_eq!(records, once);
}

#[test]
fn test_rule_order_matters() {
    let chark_first: Vec<Rule> = vec![
        Rule::new("dj-chark", Condition::NameContains("Chark"), Correction::Rename("DJ Chark")),
        Rule::new(
            "initials-dj",
            Condition::Always,
            Correction::ReplaceInName { from: "DJ ", to: "D.J. " },
        ),
    ];
    let mut records = vec![draft("D.J. Chark", "JAX", Position::WR, 2019)];
    Reconciler::new(chark_first).reconcile(&mut records);
    assert_eq!(records[0].name, "D.J. Chark");
}

#[test]
fn test_condition_player_season() {
    let rule = Rule::new(
        "test",
        Condition::PlayerSeason { name: "Taysom Hill", year: 2021 },
        Correction::SetPosition(Position::QB),
    );
    let mut a = draft("Taysom Hill", "NOR", Position::TE, 2021);
    let mut b = draft("Taysom Hill", "NOR", Position::TE, 2022);

    assert!(rule.apply(&mut a));
    assert!(!rule.apply(&mut b));
    assert_eq!(a.position, Position::QB);
    assert_eq!(b.position, Position::TE);
}

#[test]
fn test_unchanged_corrections_report_nothing() {
    let mut rec = draft("Gabriel Davis", "BUF", Position::WR, 2021);
    assert!(!Correction::Rename("Gabriel Davis").apply(&mut rec));
    assert!(!Correction::SetTeam("BUF").apply(&mut rec));
    assert!(!Correction::SetPosition(Position::WR).apply(&mut rec));
    assert!(!Correction::StripRomanSuffix.apply(&mut rec));
}

fn team_history(team: &str, years: std::ops::Range<u16>) -> Vec<DraftPositionRecord> {
    years.map(|y| draft("Somebody", team, Position::RB, y)).collect()
}

#[test]
fn test_team_spans() {
    let mut records = team_history("ARI", 2014..2023);
    records.extend(team_history("OAK", 2014..2020));
    records.extend(team_history("", 2014..2015));

    let spans = team_spans(&records);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].team, "ARI");
    assert_eq!(spans[0].first, Season::new(2014));
    assert_eq!(spans[0].last, Season::new(2022));
    assert_eq!(spans[0].span(), 8);
    assert_eq!(spans[1].span(), 5);
}

#[test]
fn test_check_team_spans_flags_short_unknown_codes() {
    let mut records = team_history("ARI", 2014..2023);
    records.extend(team_history("LVR", 2020..2023));
    records.extend(team_history("OAK", 2014..2020));
    records.extend(team_history("JAC", 2014..2017));

    let violations = check_team_spans(&records, DEFAULT_SPAN_THRESHOLD);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].team, "JAC");
    assert_eq!(violations[0].first, Season::new(2014));
    assert_eq!(violations[0].last, Season::new(2016));
}

#[test]
fn test_check_team_spans_threshold_is_configurable() {
    let records = team_history("ARI", 2018..2023);
    assert_eq!(check_team_spans(&records, DEFAULT_SPAN_THRESHOLD).len(), 1);
    assert!(check_team_spans(&records, 4).is_empty());
}

#[test]
fn test_check_team_spans_flags_below_threshold_only() {
    let full = team_history("ARI", 2014..2023);
    assert_eq!(full[full.len() - 1].year.as_u16() - full[0].year.as_u16(), 8);
    assert!(check_team_spans(&full, 8).is_empty());

    let short = team_history("ARZ", 2014..2022);
    let violations = check_team_spans(&short, 8);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].span(), 7);
}
