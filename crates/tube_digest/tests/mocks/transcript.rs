use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use tube_digest::{TranscriptError, TranscriptFetcher, VideoTranscript};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub title: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub unavailable_for: HashSet<String>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            unavailable_for: HashSet::new(),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    /// Reports the given video ids as having no transcript.
    pub fn unavailable_for(mut self, video_ids: &[&str]) -> Self {
        self.unavailable_for = video_ids.iter().map(ToString::to_string).collect();
        self
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<VideoTranscript, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());

        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::Transport(anyhow::anyhow!("{}", msg)));
        }
        if self.unavailable_for.contains(video_id) {
            return Err(TranscriptError::Unavailable {
                video_id: video_id.to_string(),
            });
        }

        Ok(VideoTranscript {
            title: self.title.clone(),
            text: format!("transcript for {video_id}"),
        })
    }
}
