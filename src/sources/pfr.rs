//! pro-football-reference season fantasy tables.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;

use super::{RawTable, TableSource};
use crate::{
    cli::types::Season,
    error::{HistoryError, Result},
};

/// Yearly fantasy page; `{year}` is substituted.
pub const PFR_FANTASY_URL: &str = "https://www.pro-football-reference.com/years/{year}/fantasy.htm";

/// `id` attribute of the fantasy table on that page.
pub const FANTASY_TABLE_ID: &str = "fantasy";

pub struct PfrFantasySource {
    client: Client,
    url_template: String,
}

impl PfrFantasySource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("ffl-history/0.1")
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            url_template: PFR_FANTASY_URL.to_string(),
        })
    }

    /// Point the source at a different host, e.g. a local mirror.
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    pub fn url_for(&self, year: Season) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

#[async_trait]
impl TableSource for PfrFantasySource {
    async fn fetch_table(&self, year: Season) -> Result<RawTable> {
        let url = self.url_for(year);
        debug!("GET {url}");

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_fantasy_table(&html, year, FANTASY_TABLE_ID)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| HistoryError::Html {
        message: format!("bad selector {css:?}: {e}"),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract the table with `table_id` from a page.
///
/// The header is the last row of `<thead>`; the first one only groups
/// columns (Passing, Rushing, ...). Body rows are returned as-is, including
/// the header rows the site repeats inside `<tbody>`.
pub fn parse_fantasy_table(html: &str, year: Season, table_id: &str) -> Result<RawTable> {
    let document = Html::parse_document(html);

    let table_sel = selector(&format!("table#{table_id}"))?;
    let header_row_sel = selector("thead tr")?;
    let body_row_sel = selector("tbody tr")?;
    let cell_sel = selector("th, td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| HistoryError::Html {
            message: format!("no table with id {table_id:?} for {year}"),
        })?;

    let headers: Vec<String> = table
        .select(&header_row_sel)
        .last()
        .ok_or_else(|| HistoryError::Html {
            message: format!("table {table_id:?} for {year} has no header row"),
        })?
        .select(&cell_sel)
        .map(cell_text)
        .collect();

    let rows = table
        .select(&body_row_sel)
        .map(|tr| tr.select(&cell_sel).map(cell_text).collect())
        .collect();

    Ok(RawTable {
        year,
        headers,
        rows,
    })
}
