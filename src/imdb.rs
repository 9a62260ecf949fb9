//! IMDb Top 250 chart scraping
//!
//! Two generations of chart markup are in the wild: the classic table
//! with `td.titleColumn` anchors, and the current React layout where
//! each entry is an `h3.ipc-title__text` heading carrying its rank
//! ("1. The Shawshank Redemption"). Both parse here.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::TrackerError;
use crate::run::ReferenceSource;

pub const DEFAULT_CHART_URL: &str = "https://www.imdb.com/chart/top/";

// IMDb answers bare HTTP clients with a bot-block page; a desktop UA
// gets the real chart.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Reference source backed by the IMDb Top 250 chart page.
pub struct ImdbChart {
    client: reqwest::Client,
    chart_url: String,
}

impl ImdbChart {
    pub fn new(chart_url: impl Into<String>, timeout: Duration) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::SourceUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            chart_url: chart_url.into(),
        })
    }
}

#[async_trait]
impl ReferenceSource for ImdbChart {
    async fn fetch_reference_list(&self) -> Result<Vec<String>, TrackerError> {
        eprintln!("  -> GET {}", self.chart_url);

        let response = self
            .client
            .get(&self.chart_url)
            .send()
            .await
            .map_err(|e| TrackerError::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::SourceUnavailable(format!(
                "{} returned {}",
                self.chart_url, status
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| TrackerError::SourceUnavailable(e.to_string()))?;

        let titles = scrape_chart_titles(&html);
        if titles.is_empty() {
            // An empty reference list would make every run vacuously
            // "complete" - refuse it instead.
            return Err(TrackerError::SourceUnavailable(format!(
                "no ranked titles found at {} (markup changed?)",
                self.chart_url
            )));
        }

        Ok(titles)
    }
}

/// Pull the ranked titles out of chart HTML, in ranking order.
pub fn scrape_chart_titles(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    // Classic table layout: anchor text is the bare title.
    let titles = select_classic_titles(&doc);
    if !titles.is_empty() {
        return titles;
    }

    // Current layout: rank-prefixed headings, mixed in with unrelated
    // h3s that carry no rank.
    select_ranked_headings(&doc)
}

fn select_classic_titles(doc: &Html) -> Vec<String> {
    let mut titles = Vec::new();
    if let Ok(selector) = Selector::parse("td.titleColumn a") {
        for el in doc.select(&selector) {
            let text = el.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                titles.push(text);
            }
        }
    }
    titles
}

fn select_ranked_headings(doc: &Html) -> Vec<String> {
    let rank_re = Regex::new(r"^\d+\.\s+(.+)$").unwrap();

    let mut titles = Vec::new();
    if let Ok(selector) = Selector::parse("h3.ipc-title__text") {
        for el in doc.select(&selector) {
            let text = el.text().collect::<String>();
            if let Some(cap) = rank_re.captures(text.trim()) {
                titles.push(cap[1].trim().to_string());
            }
        }
    }
    titles
}
