//! CSV report generation
//!
//! One timestamped file per run, one row per missing movie, optional
//! catalog link column. The generation time rides in the header row, so
//! a file stays self-describing wherever it gets copied.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::TrackerError;
use crate::run::{ReportRow, ReportSink};

/// Report sink that writes `<timestamp>-missing-movies.csv`.
pub struct CsvReport {
    out_dir: PathBuf,
    include_urls: bool,
}

impl CsvReport {
    pub fn new(out_dir: impl Into<PathBuf>, include_urls: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            include_urls,
        }
    }

    fn report_path(&self) -> PathBuf {
        // Colons in the default time format break Windows filenames.
        let stamp = Utc::now().format("%Y-%m-%d_%H.%M.%S");
        self.out_dir.join(format!("{stamp}-missing-movies.csv"))
    }
}

fn write_failed(path: &Path, err: impl std::fmt::Display) -> TrackerError {
    TrackerError::ReportWrite(format!("{}: {}", path.display(), err))
}

impl ReportSink for CsvReport {
    fn write_report(&self, rows: &[ReportRow]) -> Result<PathBuf, TrackerError> {
        fs::create_dir_all(&self.out_dir).map_err(|e| write_failed(&self.out_dir, e))?;

        let path = self.report_path();
        let mut writer = csv::Writer::from_path(&path).map_err(|e| write_failed(&path, e))?;

        let created = format!("Created {}", Utc::now().to_rfc3339());
        if self.include_urls {
            writer
                .write_record(["Name", "Link", created.as_str()])
                .map_err(|e| write_failed(&path, e))?;
            for row in rows {
                writer
                    .write_record([
                        row.title.as_str(),
                        row.library_url.as_deref().unwrap_or(""),
                        "",
                    ])
                    .map_err(|e| write_failed(&path, e))?;
            }
        } else {
            writer
                .write_record(["Name", created.as_str()])
                .map_err(|e| write_failed(&path, e))?;
            for row in rows {
                writer
                    .write_record([row.title.as_str(), ""])
                    .map_err(|e| write_failed(&path, e))?;
            }
        }

        writer.flush().map_err(|e| write_failed(&path, e))?;
        Ok(path)
    }
}
