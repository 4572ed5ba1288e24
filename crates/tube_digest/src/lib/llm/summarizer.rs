use std::{fmt::Debug, future::Future};

pub trait Summarizer {
    /// Upper bound on transcript characters submitted with a single
    /// completion request; longer transcripts are clipped.
    const TRANSCRIPT_CHAR_BUDGET: usize = 110_000;

    type Error: Debug;

    /// Produces a short prose summary of the transcript.
    fn summarize(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Extracts the transcript's key points as an ordered list.
    fn extract_points(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;
}
