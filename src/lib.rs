//! plex250: find which IMDb Top 250 movies a Plex library is missing
//!
//! Pipeline:
//! - scrape the ranked chart (`imdb`)
//! - enumerate the Plex movie section (`plex`)
//! - reconcile the two on canonical title keys (`normalize`, `reconcile`)
//! - write a CSV report with optional catalog links (`library_url`, `report`)

pub mod error;
pub mod imdb;
pub mod library_url;
pub mod normalize;
pub mod plex;
pub mod reconcile;
pub mod report;
pub mod run;

pub use error::TrackerError;
pub use normalize::normalize;
pub use reconcile::reconcile;
pub use run::{
    run_check, LibraryCatalog, ReferenceSource, ReportRow, ReportSink, RunOptions, RunSummary,
};
