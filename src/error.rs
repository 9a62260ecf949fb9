//! Error taxonomy for a tracker run
//!
//! All failure surfaces sit at the provider and sink boundaries; the
//! reconciliation engine itself is total over in-memory data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// The reference chart could not be fetched or parsed into titles.
    #[error("reference source unavailable: {0}")]
    SourceUnavailable(String),

    /// The media server could not be reached or returned malformed data.
    #[error("library unavailable: {0}")]
    LibraryUnavailable(String),

    /// The report artifact could not be created or persisted.
    #[error("report write failed: {0}")]
    ReportWrite(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_boundary() {
        let err = TrackerError::SourceUnavailable("HTTP 500".to_string());
        assert_eq!(err.to_string(), "reference source unavailable: HTTP 500");

        let err = TrackerError::LibraryUnavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "library unavailable: connection refused");

        let err = TrackerError::ReportWrite("permission denied".to_string());
        assert_eq!(err.to_string(), "report write failed: permission denied");
    }
}
