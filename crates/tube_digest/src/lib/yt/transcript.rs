use crate::{
    parser::{parse_timedtext, WatchPage},
    types::PlayerResponse,
    yt::{TranscriptError, TranscriptFetcher, VideoTranscript},
};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

/// Fallback used when neither the og:title tag nor the player response
/// carries a title.
const TITLE_NOT_FOUND: &str = "Title not found";

/// Fetches titles and transcripts by scraping the public watch page.
///
/// The watch page embeds `ytInitialPlayerResponse`, whose caption track
/// list points at the timedtext document for the video's default track.
pub struct TranscriptClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptClient {
    pub fn new() -> Self {
        TranscriptClient {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn get_text(&self, url: &str) -> Result<String, TranscriptError> {
        let resp = self
            .http
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))
            .map_err(anyhow::Error::from)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        Ok(resp.text().await.map_err(anyhow::Error::from)?)
    }
}

impl TranscriptFetcher for TranscriptClient {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, video_id: &str) -> Result<VideoTranscript, TranscriptError> {
        let html = self
            .get_text(&format!("{}/watch?v={video_id}", self.base_url))
            .await?;
        let page = WatchPage::new(html);

        let player = page
            .player_response::<PlayerResponse>()
            .map_err(|_| TranscriptError::Parse("ytInitialPlayerResponse from the watch page"))?;

        let title = page
            .og_title()
            .or_else(|| player.video_details.as_ref()?.title.clone())
            .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

        let track = player
            .default_caption_track()
            .ok_or_else(|| TranscriptError::Unavailable {
                video_id: video_id.to_string(),
            })?;

        // caption track urls are usually absolute, but join relative ones
        // against the watch host
        let track_url = if track.base_url.starts_with("http") {
            track.base_url.clone()
        } else {
            format!("{}{}", self.base_url, track.base_url)
        };

        let xml = self.get_text(&track_url).await?;
        let text = parse_timedtext(&xml);
        if text.is_empty() {
            return Err(TranscriptError::Unavailable {
                video_id: video_id.to_string(),
            });
        }

        tracing::debug!(video_id, chars = text.len(), "Fetched transcript");
        Ok(VideoTranscript { title, text })
    }
}
