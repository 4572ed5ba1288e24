//! Serde types for the subset of `ytInitialPlayerResponse` the pipeline
//! reads: the caption track list and the video details used as a title
//! fallback.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub captions: Option<Captions>,
    pub video_details: Option<VideoDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    pub renderer: Option<CaptionTracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub title: Option<String>,
}

impl PlayerResponse {
    /// The first listed caption track, YouTube's default track for the
    /// video, when captions exist at all.
    pub fn default_caption_track(&self) -> Option<&CaptionTrack> {
        self.captions
            .as_ref()?
            .renderer
            .as_ref()?
            .caption_tracks
            .first()
    }
}
