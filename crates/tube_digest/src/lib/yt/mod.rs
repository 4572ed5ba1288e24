pub mod transcript;

use std::future::Future;

/// Title and transcript text fetched for a single video id.
#[derive(Debug, Clone)]
pub struct VideoTranscript {
    pub title: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// The video has no caption tracks (e.g. captions disabled).
    #[error("transcripts are disabled or unavailable for video {video_id}")]
    Unavailable { video_id: String },

    /// The watch page or caption endpoint could not be reached.
    #[error("transcript transport failure: {0}")]
    Transport(#[from] anyhow::Error),

    /// The endpoint answered with a non-success status.
    #[error("transcript endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The watch page did not contain the expected player data.
    #[error("failed to parse transcript data: {0}")]
    Parse(&'static str),
}

pub trait TranscriptFetcher {
    fn fetch(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoTranscript, TranscriptError>> + Send;
}
