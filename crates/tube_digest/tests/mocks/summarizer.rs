use std::sync::{Arc, Mutex};

use tube_digest::Summarizer;

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub points: Vec<String>,
    pub summarize_calls: Arc<Mutex<Vec<String>>>,
    pub points_calls: Arc<Mutex<Vec<String>>>,
    pub fail_summary_containing: Option<String>,
    pub fail_points_containing: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str, points: &[&str]) -> Self {
        Self {
            summary: summary.to_string(),
            points: points.iter().map(ToString::to_string).collect(),
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
            points_calls: Arc::new(Mutex::new(Vec::new())),
            fail_summary_containing: None,
            fail_points_containing: None,
        }
    }

    /// Fails `summarize` for transcripts containing the given marker.
    pub fn failing_summary_containing(mut self, marker: &str) -> Self {
        self.fail_summary_containing = Some(marker.to_string());
        self
    }

    /// Fails `extract_points` for transcripts containing the given marker.
    pub fn failing_points_containing(mut self, marker: &str) -> Self {
        self.fail_points_containing = Some(marker.to_string());
        self
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, transcript: &str) -> Result<String, Self::Error> {
        self.summarize_calls
            .lock()
            .unwrap()
            .push(transcript.to_string());
        if let Some(ref marker) = self.fail_summary_containing {
            if transcript.contains(marker.as_str()) {
                anyhow::bail!("model rate limit exceeded");
            }
        }
        Ok(self.summary.clone())
    }

    async fn extract_points(&self, transcript: &str) -> Result<Vec<String>, Self::Error> {
        self.points_calls
            .lock()
            .unwrap()
            .push(transcript.to_string());
        if let Some(ref marker) = self.fail_points_containing {
            if transcript.contains(marker.as_str()) {
                anyhow::bail!("model rate limit exceeded");
            }
        }
        Ok(self.points.clone())
    }
}
