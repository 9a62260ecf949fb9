//! Plex library enumeration via the section contents API
//!
//! `GET /library/sections/{id}/all` is paged with the container
//! headers; every page is fetched before the catalog counts as
//! complete, so a partial read can never masquerade as a small library.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::TrackerError;
use crate::run::LibraryCatalog;

const DEFAULT_PAGE_SIZE: usize = 200;

/// Library catalog backed by a Plex server's movie section.
pub struct PlexServer {
    client: reqwest::Client,
    base_url: String,
    token: String,
    section: u32,
    page_size: usize,
}

#[derive(Debug, Deserialize)]
struct ContainerResponse {
    #[serde(rename = "MediaContainer")]
    container: MediaContainer,
}

#[derive(Debug, Deserialize)]
struct MediaContainer {
    #[serde(rename = "totalSize")]
    total_size: Option<usize>,
    #[serde(rename = "Metadata", default)]
    metadata: Vec<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    title: Option<String>,
}

impl PlexServer {
    pub fn new(
        base_url: &str,
        token: &str,
        section: u32,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::LibraryUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            section,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    #[cfg(test)]
    fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    async fn fetch_page(&self, start: usize) -> Result<MediaContainer, TrackerError> {
        let url = format!("{}/library/sections/{}/all", self.base_url, self.section);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Plex-Token", &self.token)
            .header("X-Plex-Container-Start", start.to_string())
            .header("X-Plex-Container-Size", self.page_size.to_string())
            .send()
            .await
            .map_err(|e| TrackerError::LibraryUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::LibraryUnavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        let parsed: ContainerResponse = response
            .json()
            .await
            .map_err(|e| TrackerError::LibraryUnavailable(format!("malformed container: {}", e)))?;

        Ok(parsed.container)
    }
}

#[async_trait]
impl LibraryCatalog for PlexServer {
    async fn fetch_library_titles(&self) -> Result<Vec<String>, TrackerError> {
        let mut titles = Vec::new();
        let mut start = 0usize;

        loop {
            eprintln!("  -> section {} offset {}", self.section, start);
            let container = self.fetch_page(start).await?;
            let page_len = container.metadata.len();

            // Entries without a title cannot match anything; skip them.
            titles.extend(container.metadata.into_iter().filter_map(|m| m.title));

            start += page_len;
            let reached_end = match container.total_size {
                Some(total) => start >= total,
                // Older servers omit totalSize; a short page is the end.
                None => page_len < self.page_size,
            };
            if page_len == 0 || reached_end {
                break;
            }
        }

        Ok(titles)
    }
}
