use crate::yt::TranscriptError;

/// Per-record pipeline failure.
///
/// Every variant is recorded against the failing record and never aborts
/// the surrounding run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record's URL carries no recognizable YouTube video id.
    #[error("no YouTube video id found in url: {0}")]
    InvalidUrl(String),

    /// Transcript fetch failed, either because the video has no captions
    /// or because the transcript endpoint could not be reached.
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// The summarization collaborator failed.
    #[error("summarization failed: {0}")]
    Summarize(String),

    /// Results were computed but could not be written back to the store.
    #[error("failed to persist results: {0}")]
    Persist(#[source] anyhow::Error),

    /// Scraped page data did not have the expected structure.
    #[error("failed to parse {0}")]
    Parse(&'static str),
}
