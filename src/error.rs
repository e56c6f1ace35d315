use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Category tag of a [`ScrapeError`], used to decide whether a caller
/// should rewrite the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Request,
    Status,
    Selector,
    Extraction,
    Csv,
    Io,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no element matches `{selector}` on {url}")]
    MissingElement { selector: String, url: String },

    #[error("element `{selector}` on {url} has no `{attribute}` attribute")]
    MissingAttribute {
        selector: String,
        attribute: String,
        url: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Relabeled {
        message: String,
        #[source]
        source: Box<ScrapeError>,
    },
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Request { .. } => ErrorKind::Request,
            ScrapeError::Status { .. } => ErrorKind::Status,
            ScrapeError::InvalidSelector { .. } => ErrorKind::Selector,
            ScrapeError::MissingElement { .. } | ScrapeError::MissingAttribute { .. } => {
                ErrorKind::Extraction
            }
            ScrapeError::Csv(_) => ErrorKind::Csv,
            ScrapeError::Io(_) | ScrapeError::CreateDir { .. } => ErrorKind::Io,
            ScrapeError::Relabeled { source, .. } => source.kind(),
        }
    }

    /// Replaces the message when the error is of `kind`, otherwise hands the
    /// error back untouched. The original error stays reachable as the source.
    pub fn relabel(self, kind: ErrorKind, message: impl Into<String>) -> Self {
        if self.kind() != kind {
            return self;
        }
        ScrapeError::Relabeled {
            message: message.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn missing_price() -> ScrapeError {
        ScrapeError::MissingElement {
            selector: ".price".to_string(),
            url: "http://example.com/shirt".to_string(),
        }
    }

    #[test]
    fn relabel_replaces_message_on_matching_kind() {
        let err = missing_price().relabel(ErrorKind::Extraction, "no price on page");

        assert_eq!(err.to_string(), "no price on page");
        assert_eq!(err.kind(), ErrorKind::Extraction);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("no element matches `.price` on http://example.com/shirt")
        );
    }

    #[test]
    fn relabel_leaves_other_kinds_alone() {
        let err = missing_price().relabel(ErrorKind::Request, "Cannot connect with x");

        assert!(matches!(err, ScrapeError::MissingElement { .. }));
        assert_eq!(
            err.to_string(),
            "no element matches `.price` on http://example.com/shirt"
        );
    }

    #[test]
    fn status_errors_are_not_request_errors() {
        let err = ScrapeError::Status {
            url: "http://example.com".to_string(),
            status: StatusCode::NOT_FOUND,
        };

        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.to_string(), "http://example.com responded with 404 Not Found");
    }
}
