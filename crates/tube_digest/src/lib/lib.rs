mod error;
mod llm;
pub mod parser;
mod processor;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::openai;
pub use llm::Summarizer;
pub use processor::{
    builder::VideoSummaryProcessorBuilder, RecordFailure, RunResult, VideoSummaryProcessor,
};
pub use yt::{TranscriptError, TranscriptFetcher, VideoTranscript};
