use notion_store::VideoStore;

use crate::{yt::TranscriptFetcher, Summarizer, VideoSummaryProcessor};

/// Typestate builder for [`VideoSummaryProcessor`]; `build` is only
/// available once all three collaborators have been supplied.
pub struct VideoSummaryProcessorBuilder<N = (), T = (), S = ()> {
    store: N,
    transcripts: T,
    summarizer: S,
}

impl Default for VideoSummaryProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSummaryProcessorBuilder {
    pub fn new() -> Self {
        Self {
            store: (),
            transcripts: (),
            summarizer: (),
        }
    }
}

impl<N, T, S> VideoSummaryProcessorBuilder<N, T, S> {
    pub fn store<N2: VideoStore + Send + Sync + 'static>(
        self,
        store: N2,
    ) -> VideoSummaryProcessorBuilder<N2, T, S> {
        VideoSummaryProcessorBuilder {
            store,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
        }
    }

    pub fn transcripts<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> VideoSummaryProcessorBuilder<N, T2, S> {
        VideoSummaryProcessorBuilder {
            store: self.store,
            transcripts,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoSummaryProcessorBuilder<N, T, S2> {
        VideoSummaryProcessorBuilder {
            store: self.store,
            transcripts: self.transcripts,
            summarizer,
        }
    }
}

impl<N, T, S> VideoSummaryProcessorBuilder<N, T, S>
where
    N: VideoStore + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoSummaryProcessor<N, T, S> {
        VideoSummaryProcessor {
            store: self.store,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
        }
    }
}
