//! One full tracker run: fetch both sides, reconcile, report
//!
//! The providers and the sink sit behind traits so the run logic is
//! testable with in-memory fixtures; nothing here knows about HTTP or
//! the filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::error::TrackerError;
use crate::library_url::build_search_url;
use crate::reconcile::reconcile;

/// Produces the ordered reference ranking.
#[async_trait]
pub trait ReferenceSource {
    async fn fetch_reference_list(&self) -> Result<Vec<String>, TrackerError>;
}

/// Produces every title the library currently holds.
#[async_trait]
pub trait LibraryCatalog {
    async fn fetch_library_titles(&self) -> Result<Vec<String>, TrackerError>;
}

/// One row of the generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub title: String,
    pub library_url: Option<String>,
}

/// Persists the report rows, returning the written path.
pub trait ReportSink {
    fn write_report(&self, rows: &[ReportRow]) -> Result<PathBuf, TrackerError>;
}

/// Options for a single run.
pub struct RunOptions {
    /// Annotate each missing title with a catalog search link.
    pub library_urls: bool,
    /// Catalog search endpoint for the links.
    pub search_base: Url,
    /// Query parameter the catalog expects the title in.
    pub search_param: String,
    /// Compute and narrate, but skip writing the report.
    pub dry_run: bool,
}

/// Counts and artifacts from a completed run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub reference: usize,
    pub library: usize,
    pub missing: usize,
    pub report: Option<String>,
}

/// Execute one full run against the given providers and sink.
///
/// The two fetches are independent and network-bound, so they run
/// concurrently; reconciliation starts only once both lists are fully
/// materialized. On a sink failure the missing titles are printed to
/// stderr before the error surfaces, so the computed result is not
/// lost with the artifact.
pub async fn run_check(
    source: &dyn ReferenceSource,
    library: &dyn LibraryCatalog,
    sink: &dyn ReportSink,
    options: &RunOptions,
) -> Result<RunSummary, TrackerError> {
    eprintln!("Fetching reference ranking and library catalog...");
    let (reference, library_titles) = tokio::try_join!(
        source.fetch_reference_list(),
        library.fetch_library_titles()
    )?;
    eprintln!(
        "  {} ranked titles, {} in library",
        reference.len(),
        library_titles.len()
    );

    let missing = reconcile(&reference, &library_titles);
    eprintln!("  {} missing from library", missing.len());

    let rows: Vec<ReportRow> = missing
        .iter()
        .map(|title| ReportRow {
            title: title.clone(),
            library_url: options.library_urls.then(|| {
                build_search_url(&options.search_base, &options.search_param, title).to_string()
            }),
        })
        .collect();

    let report = if options.dry_run {
        narrate_missing(&rows);
        None
    } else {
        match sink.write_report(&rows) {
            Ok(path) => {
                eprintln!("Report written to {}", path.display());
                Some(path.display().to_string())
            }
            Err(err) => {
                narrate_missing(&rows);
                return Err(err);
            }
        }
    };

    Ok(RunSummary {
        reference: reference.len(),
        library: library_titles.len(),
        missing: missing.len(),
        report,
    })
}

fn narrate_missing(rows: &[ReportRow]) {
    for row in rows {
        eprintln!("  -> {}", row.title);
    }
}
