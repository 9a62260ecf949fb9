//! plex250 CLI
//!
//! Scrapes the IMDb Top 250 chart, enumerates a Plex movie library,
//! and writes a CSV of the ranked movies the library is missing.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use url::Url;

use plex250::imdb::{ImdbChart, DEFAULT_CHART_URL};
use plex250::plex::PlexServer;
use plex250::report::CsvReport;
use plex250::run::{run_check, RunOptions};

#[derive(Parser)]
#[command(name = "plex250")]
#[command(version)]
#[command(about = "Find which IMDb Top 250 movies are missing from a Plex library")]
struct Cli {
    /// Plex server base URL (e.g. http://192.168.1.10:32400)
    #[arg(long, env = "PLEX_BASE_URL")]
    plex_url: String,

    /// Plex authentication token
    #[arg(long, env = "PLEX_TOKEN", hide_env_values = true)]
    plex_token: String,

    /// Plex library section id holding movies
    #[arg(long, default_value = "1")]
    section: u32,

    /// Chart to rank against
    #[arg(long, default_value = DEFAULT_CHART_URL)]
    chart_url: String,

    /// Add a catalog search link for each missing movie
    #[arg(long)]
    library_urls: bool,

    /// Catalog search endpoint for --library-urls
    #[arg(long, default_value = "https://catalog.mcpl.info/search")]
    search_base: Url,

    /// Query parameter the catalog expects the title in
    #[arg(long, default_value = "q")]
    search_param: String,

    /// Directory the report is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// HTTP timeout per request in milliseconds
    #[arg(long, default_value = "30000")]
    timeout: u64,

    /// Compute and print, but skip writing the report
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let timeout = Duration::from_millis(cli.timeout);

    let source = ImdbChart::new(cli.chart_url, timeout)?;
    let library = PlexServer::new(&cli.plex_url, &cli.plex_token, cli.section, timeout)?;
    let sink = CsvReport::new(cli.out_dir, cli.library_urls);

    let options = RunOptions {
        library_urls: cli.library_urls,
        search_base: cli.search_base,
        search_param: cli.search_param,
        dry_run: cli.dry_run,
    };

    let summary = run_check(&source, &library, &sink, &options).await?;

    // Compact JSON to stdout; progress already went to stderr.
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
