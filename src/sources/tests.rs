//! Unit tests for raw table sources

use super::adp::read_adp_csv;
use super::pfr::{parse_fantasy_table, FANTASY_TABLE_ID};
use super::*;
use std::collections::HashSet;

const FANTASY_PAGE: &str = r#"
<html><body>
<table id="passing"><thead><tr><th>Other</th></tr></thead></table>
<table id="fantasy">
  <thead>
    <tr class="over_header"><th></th><th></th><th colspan="2">Rushing</th></tr>
    <tr><th>Rk</th><th>Player</th><th>Att</th><th>Yds</th></tr>
  </thead>
  <tbody>
    <tr><th>1</th><td><a href="/players/M/McCaCh01.htm">Christian McCaffrey</a>*+</td><td>287</td><td>1387</td></tr>
    <tr><th>2</th><td>Lamar Jackson*</td><td>176</td><td> 1206 </td></tr>
    <tr class="thead"><th>Rk</th><th>Player</th><th>Att</th><th>Yds</th></tr>
    <tr><th>3</th><td>Ezekiel Elliott</td><td>301</td><td></td></tr>
  </tbody>
</table>
</body></html>
"#;

#[test]
fn test_parse_fantasy_table_uses_last_header_row() {
    let table = parse_fantasy_table(FANTASY_PAGE, Season::new(2019), FANTASY_TABLE_ID).unwrap();
    assert_eq!(table.year, Season::new(2019));
    assert_eq!(table.headers, vec!["Rk", "Player", "Att", "Yds"]);
}

#[test]
fn test_parse_fantasy_table_keeps_raw_rows() {
    let table = parse_fantasy_table(FANTASY_PAGE, Season::new(2019), FANTASY_TABLE_ID).unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[0], vec!["1", "Christian McCaffrey*+", "287", "1387"]);
    assert_eq!(table.rows[1][3], "1206");
    // repeated header rows are left for the normalizer
    assert_eq!(table.rows[2][0], "Rk");
    assert_eq!(table.rows[3][3], "");
}

#[test]
fn test_parse_fantasy_table_missing_table() {
    let err = parse_fantasy_table("<html></html>", Season::new(2019), FANTASY_TABLE_ID).unwrap_err();
    match err {
        HistoryError::Html { message } => assert!(message.contains("fantasy")),
        other => panic!("Expected Html error, got {other:?}"),
    }
}

#[test]
fn test_read_adp_csv_selects_columns() {
    let csv = "\
Rank,Name,Team,Bye,Position,PositionRank,AverageDraftPositionPPR,AverageDraftPosition
1,Saquon Barkley,NYG,11,RB,RB1,1.4,2.1
2,Christian McCaffrey,CAR,7,RB,RB2,2.2,3.5
";
    let table = read_adp_csv(csv.as_bytes(), Season::new(2019)).unwrap();
    assert_eq!(
        table.headers,
        vec!["Name", "Team", "Position", "PositionRank", "AverageDraftPositionPPR"]
    );
    assert_eq!(
        table.rows[1],
        vec!["Christian McCaffrey", "CAR", "RB", "RB2", "2.2"]
    );
}

#[test]
fn test_read_adp_csv_keeps_file_column_order() {
    let csv = "\
Team,Name,Position,PositionRank,AverageDraftPositionPPR
NYG,Saquon Barkley,RB,RB1,1.4
";
    let table = read_adp_csv(csv.as_bytes(), Season::new(2019)).unwrap();
    assert_eq!(table.headers[0], "Team");
    assert_eq!(table.rows[0][0], "NYG");
}

#[test]
fn test_read_adp_csv_missing_column() {
    let csv = "Name,Team,Position,PositionRank\nA,B,RB,RB1\n";
    match read_adp_csv(csv.as_bytes(), Season::new(2015)).unwrap_err() {
        HistoryError::MissingColumn { year, column } => {
            assert_eq!(year, Season::new(2015));
            assert_eq!(column, "AverageDraftPositionPPR");
        }
        other => panic!("Expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_check_column_consistency() {
    let make = |year: u16, headers: &[&str]| RawTable {
        year: Season::new(year),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: vec![],
    };
    let a = make(2014, &["Name", "Team"]);
    let b = make(2015, &["Name", "Team"]);
    let c = make(2016, &["Team", "Name"]);

    assert!(check_column_consistency([&a, &b]).is_ok());
    match check_column_consistency([&a, &b, &c]).unwrap_err() {
        HistoryError::ColumnMismatch {
            year,
            expected,
            found,
        } => {
            assert_eq!(year, Season::new(2016));
            assert_eq!(expected, vec!["Name", "Team"]);
            assert_eq!(found, vec!["Team", "Name"]);
        }
        other => panic!("Expected ColumnMismatch, got {other:?}"),
    }
    assert!(check_column_consistency(std::iter::empty::<&RawTable>()).is_ok());
}

struct FlakySource {
    broken: HashSet<u16>,
}

#[async_trait]
impl TableSource for FlakySource {
    async fn fetch_table(&self, year: Season) -> Result<RawTable> {
        if self.broken.contains(&year.as_u16()) {
            return Err(HistoryError::NoData);
        }
        Ok(RawTable {
            year,
            headers: vec!["Name".to_string()],
            rows: vec![vec![format!("player-{year}")]],
        })
    }
}

#[tokio::test]
async fn test_fetch_years_isolates_failures() {
    let source = FlakySource {
        broken: [2015].into_iter().collect(),
    };
    let range = YearRange::new(Season::new(2014), Season::new(2018)).unwrap();

    let fetched = fetch_years(&source, &range).await;

    assert_eq!(fetched.tables.len(), 3);
    assert_eq!(fetched.failures.len(), 1);
    assert!(fetched.failures.contains_key(&Season::new(2015)));
    assert_eq!(fetched.missing_years(&range), vec![Season::new(2015)]);

    let years: Vec<Season> = fetched.tables.values().map(|t| t.year).collect();
    assert_eq!(
        years,
        vec![Season::new(2014), Season::new(2016), Season::new(2017)]
    );
}

#[tokio::test]
async fn test_adp_source_reads_year_files() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("ppr-adp-2020.csv"),
        "Name,Team,Position,PositionRank,AverageDraftPositionPPR\nDavante Adams,GB,WR,WR1,9.8\n",
    )
    .unwrap();
    let source = AdpCsvSource::new(tmp.path());
    let range = YearRange::new(Season::new(2020), Season::new(2022)).unwrap();

    let fetched = fetch_years(&source, &range).await;

    assert_eq!(fetched.tables[&Season::new(2020)].rows.len(), 1);
    assert_eq!(fetched.missing_years(&range), vec![Season::new(2021)]);
}

#[test]
fn test_pfr_url_template() {
    let source = PfrFantasySource::new()
        .unwrap()
        .with_url_template("http://localhost:8080/{year}/fantasy.htm");
    assert_eq!(
        source.url_for(Season::new(2016)),
        "http://localhost:8080/2016/fantasy.htm"
    );
    let default = PfrFantasySource::new().unwrap();
    assert_eq!(
        default.url_for(Season::new(2013)),
        "https://www.pro-football-reference.com/years/2013/fantasy.htm"
    );
}
