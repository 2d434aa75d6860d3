//! Errors surfaced by the source adapters.

use crate::http::HttpError;
use crate::model::RecordError;

/// The upstream body could not be parsed into the expected tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed, but not the document shape the feed promises.
    #[error("unexpected document shape: {0}")]
    Shape(String),
}

/// Anything that can go wrong between fetching a feed and holding records.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid record #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

impl RosterError {
    /// Attach the position of the offending entry in the feed.
    #[must_use]
    pub const fn record(index: usize, source: RecordError) -> Self {
        Self::Record { index, source }
    }
}
